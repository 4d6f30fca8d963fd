//! Browser network seams: the project document fetch and email delivery.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: the same functions compile to failing stubs so state and
//! request-building code stays testable without a browser.

pub mod catalog;
pub mod email;
