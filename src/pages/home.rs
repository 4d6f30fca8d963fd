//! Home page: the single page of the site and owner of all page state.
//!
//! ARCHITECTURE
//! ============
//! Every piece of mutable state (theme, navbar, catalog, works carousel,
//! project modal, contact form) is created here once and provided through
//! context; components never share state any other way.
//!
//! Startup runs in a fixed order: the catalog fetch resolves, the works
//! carousel renders its cards, then its layout effect binds the carousel
//! model to the rendered card count.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use gallery::carousel::CarouselModel;
use gallery::catalog::ProjectCatalog;
use gallery::modal::ProjectModalController;

use crate::components::contact_form::ContactForm;
use crate::components::navbar::Navbar;
use crate::components::page_loader::PageLoader;
use crate::components::project_modal::ProjectModal;
use crate::components::works_carousel::WorksCarousel;
use crate::config::SiteConfig;
use crate::state::contact::FormSubmission;
use crate::state::nav::{NavState, Section};
use crate::state::theme::ThemeState;
use crate::util;

/// Whether anything covering the page currently forbids body scrolling.
fn scroll_locked(loader_visible: bool, nav: &NavState, modal: &ProjectModalController) -> bool {
    loader_visible || nav.locks_scroll() || modal.is_open()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    let theme = RwSignal::new(ThemeState::new());
    let nav = RwSignal::new(NavState::default());
    let catalog = RwSignal::new(ProjectCatalog::default());
    let works = RwSignal::new(CarouselModel::default());
    let modal = RwSignal::new(ProjectModalController::new());
    let contact = RwSignal::new(FormSubmission::default());
    let loader_visible = RwSignal::new(true);

    provide_context(theme);
    provide_context(nav);
    provide_context(catalog);
    provide_context(works);
    provide_context(modal);
    provide_context(contact);

    util::theme::apply(theme.get_untracked().theme);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let loaded = crate::net::catalog::load_projects(config.data_url).await;
        works.update(CarouselModel::reset);
        catalog.set(loaded);
    });

    Effect::new(move || {
        let locked = scroll_locked(loader_visible.get(), &nav.get(), &modal.get());
        util::dom::set_scroll_locked(locked);
    });

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let mut next = nav.get_untracked();
            if next.on_scroll(util::dom::scroll_y()) {
                nav.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_contact_cta = move |_| {
        nav.update(|n| n.select(Section::Contact));
        util::dom::scroll_to_section(Section::Contact.anchor_id());
    };
    let on_works_cta = move |_| {
        nav.update(|n| n.select(Section::Works));
        util::dom::scroll_to_section(Section::Works.anchor_id());
    };

    view! {
        <PageLoader visible=loader_visible/>
        <Navbar/>
        <main>
            <section id=Section::Home.anchor_id() class="hero">
                <div class="hero-content">
                    <p class="hero-greeting">"Hello, I'm"</p>
                    <h1 class="hero-title">{config.owner_name}</h1>
                    <p class="hero-subtitle">"Software developer building for the web and beyond."</p>
                    <div class="hero-buttons">
                        <button class="btn btn-primary" on:click=on_contact_cta>"Get In Touch"</button>
                        <button class="btn btn-secondary" on:click=on_works_cta>"See My Work"</button>
                    </div>
                </div>
            </section>

            <section id=Section::About.anchor_id() class="about">
                <h2 class="section-title">"About Me"</h2>
                <p class="about-text">
                    "I enjoy turning ideas into fast, reliable software. Below is a selection of \
                     projects I have designed and built; open any of them for screenshots, the \
                     stack behind it, and a live link where one exists."
                </p>
            </section>

            <section id=Section::Works.anchor_id() class="works">
                <h2 class="section-title">"My Works"</h2>
                <WorksCarousel/>
            </section>

            <section id=Section::Contact.anchor_id() class="contact">
                <h2 class="section-title">"Contact"</h2>
                <p class="contact-text">
                    "Have a project in mind or just want to say hi? Drop me a message or write to "
                    <a href=format!("mailto:{}", config.contact_email)>{config.contact_email}</a>
                    "."
                </p>
                <ContactForm/>
            </section>
        </main>
        <footer class="footer">
            <p>{format!("© {}", config.owner_name)}</p>
        </footer>
        <ProjectModal/>
    }
}
