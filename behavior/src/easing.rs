//! Interpolation curves over normalized progress `t ∈ [0, 1]`.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Supported easing curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// Slow start and end; used for smooth scrolling.
    EaseInOutCubic,
    /// Fast start, slow end; used for counter ramps.
    EaseOutCubic,
}

impl Curve {
    /// Map progress to eased progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::EaseInOutCubic => ease_in_out_cubic(t),
            Self::EaseOutCubic => ease_out_cubic(t),
        }
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = clamp_unit(t);
    1.0 - (1.0 - t).powi(3)
}

#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = clamp_unit(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
