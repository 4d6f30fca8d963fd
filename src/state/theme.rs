//! Light/dark theme selection.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Colour theme applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for the `data-theme` attribute on `<body>`; light removes it.
    #[must_use]
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }

    /// Glyph for the toggle button: the theme it switches *to*.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Theme toggle state for the navbar button. Lasts for the page session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Fresh page state; every visit starts light.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the theme and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
