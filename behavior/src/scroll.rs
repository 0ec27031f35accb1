//! Scroll-position effects.
//!
//! Everything here is a pure function of the current scroll position; no
//! frame-to-frame memory is kept.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{NAVBAR_OFFSET_PX, NAVBAR_SCROLLED_AFTER_PX, PARALLAX_RATE, PARALLAX_SPEED_STEP};

/// Snapshot of the window's scroll geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self { scroll_top, document_height, viewport_height }
    }
}

/// Reading progress as a percentage in `[0, 100]`.
///
/// A page with no scrollable range reports 0.
#[must_use]
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let range = metrics.document_height - metrics.viewport_height;
    if range.is_nan() || range <= 0.0 || !metrics.scroll_top.is_finite() {
        return 0.0;
    }
    (metrics.scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Vertical parallax offset for the `index`-th tracked element.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parallax_offset(scroll_top: f64, index: usize) -> f64 {
    let speed = (index as f64 + 1.0) * PARALLAX_SPEED_STEP;
    scroll_top * PARALLAX_RATE * speed
}

/// Scroll destination for an anchor whose element sits at `offset_top`.
#[must_use]
pub fn anchor_target(offset_top: f64) -> f64 {
    (offset_top - NAVBAR_OFFSET_PX).max(0.0)
}

#[must_use]
pub fn navbar_scrolled(scroll_top: f64) -> bool {
    scroll_top > NAVBAR_SCROLLED_AFTER_PX
}

#[must_use]
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value}%")
}
