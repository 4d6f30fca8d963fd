//! Responsive layout math for the works track.
//!
//! The page picks how many cards fit from the viewport width, then slides the
//! track left by whole card-plus-gap steps. Everything is in CSS pixels.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::carousel::CarouselModel;
use crate::consts::{CARD_GAP_PX, DOUBLE_CARD_MAX_WIDTH, MAX_SLIDES_PER_VIEW, SINGLE_CARD_MAX_WIDTH};

/// Cards per page for a viewport `width`: ≤768 → 1, ≤1200 → 2, otherwise 3.
#[must_use]
pub fn slides_per_view(width: f64) -> usize {
    if width <= SINGLE_CARD_MAX_WIDTH {
        1
    } else if width <= DOUBLE_CARD_MAX_WIDTH {
        2
    } else {
        MAX_SLIDES_PER_VIEW
    }
}

/// Number of page dots for `total` cards shown `slides_per_view` at a time.
#[must_use]
pub fn dot_count(total: usize, slides_per_view: usize) -> usize {
    total.div_ceil(slides_per_view.max(1))
}

/// Width of one card when `slides_per_view` cards and their gaps share
/// `container_width`. Never negative.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn item_width(container_width: f64, slides_per_view: usize) -> f64 {
    let per_view = slides_per_view.max(1) as f64;
    let gaps = (per_view - 1.0) * CARD_GAP_PX;
    ((container_width - gaps) / per_view).max(0.0)
}

/// Horizontal translation of the track for the model's current index.
///
/// The gap is counted once per skipped card even on single-card layouts.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn track_offset(model: &CarouselModel, container_width: f64) -> f64 {
    let width = item_width(container_width, model.slides_per_view());
    let shifted = model.current_index() as f64 * (width + CARD_GAP_PX);
    // Subtracting from zero keeps the first slide at +0 rather than -0.
    0.0 - shifted
}

/// CSS `transform` value for [`track_offset`].
#[must_use]
pub fn track_transform(model: &CarouselModel, container_width: f64) -> String {
    format!("translateX({}px)", track_offset(model, container_width))
}
