//! Mirrors the active theme onto the `data-theme` attribute of `<body>`.
//!
//! The choice lives only in page state: every visit starts light and nothing
//! is written to browser storage.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

/// Set or clear `data-theme` on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let result = match theme.attribute_value() {
            Some(value) => body.set_attribute("data-theme", value),
            None => body.remove_attribute("data-theme"),
        };
        if let Err(err) = result {
            log::warn!("could not apply theme: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
