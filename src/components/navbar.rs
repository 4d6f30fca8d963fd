//! Fixed navigation bar with section links, theme toggle, and mobile menu.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::nav::{NavState, Section};
use crate::state::theme::ThemeState;
use crate::util;

/// Navbar. Link clicks smooth-scroll to their section and close the menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let config = expect_context::<SiteConfig>();

    let on_toggle_theme = move |_| {
        let mut next = theme.get_untracked();
        let applied = next.toggle();
        theme.set(next);
        util::theme::apply(applied);
    };

    let links = Section::ALL
        .iter()
        .map(|&section| {
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                nav.update(|n| n.select(section));
                if !util::dom::scroll_to_section(section.anchor_id()) {
                    log::debug!("section #{} not on page", section.anchor_id());
                }
            };
            view! {
                <li class="nav-item">
                    <a
                        class="nav-link"
                        class:active=move || nav.with(|n| n.active == section)
                        href=section.href()
                        on:click=on_click
                    >
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" class:scrolled=move || nav.with(|n| n.scrolled)>
            <div class="nav-container">
                <a class="nav-logo" href=Section::Home.href()>{config.owner_name}</a>
                <ul class="nav-menu" class:active=move || nav.with(|n| n.menu_open)>
                    {links}
                </ul>
                <div class="nav-actions">
                    <button class="theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                        <span class="theme-icon">{move || theme.with(|t| t.theme.toggle_icon())}</span>
                    </button>
                    <button
                        class="hamburger"
                        class:active=move || nav.with(|n| n.menu_open)
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        title="Menu"
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
