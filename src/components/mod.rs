//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections from state provided by the home page
//! through Leptos context, and push user input back into that state.

pub mod contact_form;
pub mod navbar;
pub mod page_loader;
pub mod project_modal;
pub mod works_carousel;
