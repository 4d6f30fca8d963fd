//! Slide-index state machine shared by the works grid and the modal gallery.
//!
//! A carousel is a row of `total_slides` items of which `slides_per_view`
//! consecutive ones are visible at a time. The visible window starts at
//! `current_index`, which always stays inside `[0, max_index]`.
//!
//! Two navigation granularities coexist and must not be conflated:
//!
//! - [`CarouselModel::step`] (arrows, swipes, arrow keys) moves one slide and
//!   wraps at both ends.
//! - [`CarouselModel::go_to_dot`] (page dots) jumps a whole page of
//!   `slides_per_view` slides.
//!
//! The modal uses the same model with `slides_per_view == 1`, where pages and
//! slides coincide and [`CarouselModel::go_to_index`] maps indicators 1:1.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Navigation direction for a single-slide step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward lower indices (left arrow, swipe right).
    Prev,
    /// Toward higher indices (right arrow, swipe left).
    Next,
}

/// Pure carousel state: how many slides exist, how many fit on screen, and
/// which slide is leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselModel {
    total_slides: usize,
    slides_per_view: usize,
    current_index: usize,
}

impl Default for CarouselModel {
    fn default() -> Self {
        Self { total_slides: 0, slides_per_view: 1, current_index: 0 }
    }
}

impl CarouselModel {
    /// Create a carousel positioned on its first slide.
    ///
    /// `slides_per_view` is raised to 1 if zero is passed.
    #[must_use]
    pub fn new(total_slides: usize, slides_per_view: usize) -> Self {
        let mut model = Self::default();
        model.configure(total_slides, slides_per_view);
        model
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    #[must_use]
    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Highest valid `current_index`: the start of the last full page.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.total_slides.saturating_sub(self.slides_per_view)
    }

    /// Number of page dots: `ceil(total_slides / slides_per_view)`.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        crate::viewport::dot_count(self.total_slides, self.slides_per_view)
    }

    /// Replace the slide count and page size after a data reload or resize.
    ///
    /// The current index survives when it is still inside the new window and
    /// resets to 0 otherwise.
    pub fn configure(&mut self, total_slides: usize, slides_per_view: usize) {
        self.total_slides = total_slides;
        self.slides_per_view = slides_per_view.max(1);
        if self.current_index > self.max_index() {
            self.current_index = 0;
        }
    }

    /// Move one slide in `direction`, wrapping past either end.
    ///
    /// Stepping back from 0 lands on `max_index`; stepping forward from
    /// `max_index` lands on 0.
    pub fn step(&mut self, direction: Direction) {
        let max = self.max_index();
        self.current_index = match direction {
            Direction::Prev if self.current_index == 0 => max,
            Direction::Prev => self.current_index - 1,
            Direction::Next if self.current_index >= max => 0,
            Direction::Next => self.current_index + 1,
        };
    }

    /// Jump to the first slide of page `dot_index`.
    ///
    /// On uneven divisions the last page would start past `max_index`; the
    /// target is clamped so the final page stays fully populated.
    pub fn go_to_dot(&mut self, dot_index: usize) {
        let target = dot_index.saturating_mul(self.slides_per_view);
        self.current_index = target.min(self.max_index());
    }

    /// Jump straight to slide `index` (modal indicators), clamped to the window.
    pub fn go_to_index(&mut self, index: usize) {
        self.current_index = index.min(self.max_index());
    }

    /// Dot to highlight for the current position.
    ///
    /// This is `current_index / slides_per_view`, except that a carousel
    /// resting on `max_index` highlights the final dot: that is where
    /// [`Self::go_to_dot`] lands for the last page.
    #[must_use]
    pub fn active_dot_index(&self) -> usize {
        let dots = self.dot_count();
        if dots == 0 {
            return 0;
        }
        if self.current_index == self.max_index() {
            return dots - 1;
        }
        (self.current_index / self.slides_per_view).min(dots - 1)
    }

    /// Reset to the first slide, keeping the slide count and page size.
    pub fn reset(&mut self) {
        self.current_index = 0;
    }
}
