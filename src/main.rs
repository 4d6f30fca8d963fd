//! Trunk entry point; the browser build runs with the `csr` feature.

fn main() {
    #[cfg(feature = "csr")]
    portfolio::mount();
}
