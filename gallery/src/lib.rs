//! Portfolio gallery state: project catalog, carousels, and the project modal.
//!
//! This crate holds every piece of page logic that does not touch the DOM. The
//! Leptos client renders from these types and feeds user input back into
//! them; nothing here knows about elements, styles, or events beyond plain
//! numbers and key names, so the whole crate is testable natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Project records, the id lookup, and best-effort loading |
//! | [`carousel`] | Slide-index state machine shared by both carousels |
//! | [`modal`] | Project detail modal lifecycle and keyboard mapping |
//! | [`viewport`] | Breakpoints, card widths, and track offsets |
//! | [`gesture`] | Horizontal swipe detection |
//! | [`consts`] | Shared numeric constants (breakpoints, gaps, thresholds) |

pub mod carousel;
pub mod catalog;
pub mod consts;
pub mod gesture;
pub mod modal;
pub mod viewport;
