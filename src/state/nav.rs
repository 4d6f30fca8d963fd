//! Navbar state: mobile menu, active link, and scrolled styling.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll distance after which the navbar switches to its elevated style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Height of the fixed navbar; section jumps stop this far above the target.
pub const NAV_OFFSET_PX: f64 = 70.0;

/// Page sections reachable from the navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Works,
    Contact,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Works, Self::Contact];

    /// Element id of the section, also used as the link fragment.
    #[must_use]
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Works => "works",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Works => "Works",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor_id())
    }
}

/// Navbar UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub active: Section,
    pub scrolled: bool,
}

impl NavState {
    /// Open or close the mobile menu (hamburger click).
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A nav link was clicked: mark it active and close the mobile menu.
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.close_menu();
    }

    /// Update the scrolled flag from `window.scrollY`. Returns whether it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// The open mobile menu covers the page, so the body must not scroll.
    #[must_use]
    pub fn locks_scroll(&self) -> bool {
        self.menu_open
    }
}

/// Scroll position that brings a section at `offset_top` just below the navbar.
#[must_use]
pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - NAV_OFFSET_PX
}
