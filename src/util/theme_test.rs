#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn apply_is_a_noop_outside_browser() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
