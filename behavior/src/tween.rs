//! Timestamp-driven animations.
//!
//! A [`Tween`] captures its start time from the first frame it sees, so the
//! host can feed raw `requestAnimationFrame` timestamps without bookkeeping.
//! Once elapsed time reaches the duration it reports `done` with the exact
//! end value.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use crate::consts::SMOOTH_SCROLL_MS;
use crate::easing::Curve;

/// One frame's output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    curve: Curve,
    started_at: Option<f64>,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: f64, curve: Curve) -> Self {
        Self { from, to, duration_ms: duration_ms.max(0.0), curve, started_at: None }
    }

    /// Evaluate at `now_ms`. The first call pins the start time.
    pub fn sample(&mut self, now_ms: f64) -> Sample {
        let start = *self.started_at.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(0.0);
        if elapsed >= self.duration_ms {
            return Sample { value: self.to, done: true };
        }
        let eased = self.curve.apply(elapsed / self.duration_ms);
        Sample { value: self.from + (self.to - self.from) * eased, done: false }
    }

    #[must_use]
    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }
}

/// Eased scroll from the current offset to a destination.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    tween: Tween,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(start_y: f64, target_y: f64) -> Self {
        Self { tween: Tween::new(start_y, target_y, SMOOTH_SCROLL_MS, Curve::EaseInOutCubic) }
    }

    /// Vertical offset to scroll to on this frame.
    pub fn frame(&mut self, now_ms: f64) -> Sample {
        self.tween.sample(now_ms)
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.tween.target()
    }
}
