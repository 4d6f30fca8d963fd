//! Page-level UI state.
//!
//! DESIGN
//! ======
//! Each concern (theme, navigation, contact form) is a small plain struct so
//! it can be tested natively. The home page wraps instances in `RwSignal`s and
//! provides them through context; carousel and modal state live in the
//! `gallery` crate.

pub mod contact;
pub mod nav;
pub mod theme;
