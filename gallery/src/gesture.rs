//! Horizontal swipe detection for touch screens.
//!
//! Only the X coordinate matters: a touch that travels more than
//! [`SWIPE_THRESHOLD_PX`] horizontally between start and end is a swipe.
//! Swiping left reveals the next slide, swiping right the previous one.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::carousel::Direction;
use crate::consts::SWIPE_THRESHOLD_PX;

/// Tracks one touch from `touchstart` to `touchend`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the touch started (screen X).
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the touch at screen X `x` and classify it.
    ///
    /// Consumes the recorded start, so a second `end` without a new `begin`
    /// yields `None`.
    pub fn end(&mut self, x: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        let travel = start - x;
        if travel.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if travel > 0.0 { Some(Direction::Next) } else { Some(Direction::Prev) }
    }
}
