//! Shared numeric constants for the gallery crate.

// ── Breakpoints ─────────────────────────────────────────────────

/// Widest viewport (CSS pixels) that shows a single card per page.
pub const SINGLE_CARD_MAX_WIDTH: f64 = 768.0;

/// Widest viewport (CSS pixels) that shows two cards per page.
pub const DOUBLE_CARD_MAX_WIDTH: f64 = 1200.0;

/// Cards per page above every breakpoint.
pub const MAX_SLIDES_PER_VIEW: usize = 3;

// ── Layout ──────────────────────────────────────────────────────

/// Horizontal gap between cards on the works track (2.5rem at 16px root size).
pub const CARD_GAP_PX: f64 = 2.5 * 16.0;

// ── Gestures ────────────────────────────────────────────────────

/// Minimum horizontal travel, in screen pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
