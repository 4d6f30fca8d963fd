#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Section
// =============================================================

#[test]
fn sections_link_to_their_anchor() {
    assert_eq!(Section::Works.href(), "#works");
    assert_eq!(Section::Contact.anchor_id(), "contact");
}

#[test]
fn sections_are_listed_in_page_order() {
    let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Home", "About", "Works", "Contact"]);
}

// =============================================================
// NavState
// =============================================================

#[test]
fn default_is_closed_at_top_on_home() {
    let nav = NavState::default();
    assert!(!nav.menu_open);
    assert!(!nav.scrolled);
    assert_eq!(nav.active, Section::Home);
}

#[test]
fn toggle_menu_flips_and_locks_scroll() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    assert!(nav.locks_scroll());
    nav.toggle_menu();
    assert!(!nav.menu_open);
    assert!(!nav.locks_scroll());
}

#[test]
fn selecting_a_link_closes_the_menu() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    nav.select(Section::About);
    assert_eq!(nav.active, Section::About);
    assert!(!nav.menu_open);
}

#[test]
fn scrolled_only_past_threshold() {
    let mut nav = NavState::default();
    assert!(!nav.on_scroll(50.0));
    assert!(!nav.scrolled);
    assert!(nav.on_scroll(51.0));
    assert!(nav.scrolled);
}

#[test]
fn on_scroll_reports_changes_only() {
    let mut nav = NavState::default();
    assert!(nav.on_scroll(200.0));
    assert!(!nav.on_scroll(300.0));
    assert!(nav.on_scroll(0.0));
    assert!(!nav.scrolled);
}

#[test]
fn scroll_target_leaves_room_for_navbar() {
    assert_eq!(scroll_target(900.0), 830.0);
}
