//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` access behind the `csr` feature so
//! components stay readable and native test builds see harmless no-ops.

pub mod dom;
pub mod theme;
