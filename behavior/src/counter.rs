//! Numeric counters that ramp up from zero when first seen.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::COUNTER_RAMP_MS;
use crate::easing::Curve;
use crate::tween::Tween;

/// Error returned by [`CounterTarget::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterParseError {
    /// The source text does not start with a digit.
    #[error("counter text {0:?} has no leading integer")]
    NoDigits(String),
    /// The leading integer does not fit the counter range.
    #[error("counter value {0:?} is out of range")]
    OutOfRange(String),
}

/// Final value of a counter plus the text shown after the number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u32,
    pub suffix: String,
}

impl CounterTarget {
    /// Build a target from the element's `data-target` attribute (if any) and
    /// its current text.
    ///
    /// The number comes from the attribute when present, otherwise from the
    /// leading digits of the text. The suffix is whatever trails the digits in
    /// the text (`"150+"` → `"+"`).
    ///
    /// # Errors
    ///
    /// Returns [`CounterParseError`] when no leading integer can be read.
    pub fn parse(target_attr: Option<&str>, text: &str) -> Result<Self, CounterParseError> {
        let text = text.trim();
        let source = target_attr.map_or(text, str::trim);
        let digits = leading_digits(source);
        if digits.is_empty() {
            return Err(CounterParseError::NoDigits(source.to_owned()));
        }
        let value = digits
            .parse::<u32>()
            .map_err(|_| CounterParseError::OutOfRange(digits.to_owned()))?;
        let suffix = text[leading_digits(text).len()..].to_owned();
        Ok(Self { value, suffix })
    }

    #[must_use]
    pub fn display(&self, value: u32) -> String {
        format!("{value}{}", self.suffix)
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// Cubic ease-out ramp from zero to a [`CounterTarget`].
#[derive(Clone, Debug, PartialEq)]
pub struct CounterRamp {
    target: CounterTarget,
    tween: Tween,
}

impl CounterRamp {
    #[must_use]
    pub fn new(target: CounterTarget) -> Self {
        let tween = Tween::new(0.0, f64::from(target.value), COUNTER_RAMP_MS, Curve::EaseOutCubic);
        Self { target, tween }
    }

    /// Text to display on this frame and whether the ramp has finished.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame(&mut self, now_ms: f64) -> (String, bool) {
        let sample = self.tween.sample(now_ms);
        let shown = if sample.done {
            self.target.value
        } else {
            (sample.value.floor().max(0.0) as u32).min(self.target.value)
        };
        (self.target.display(shown), sample.done)
    }

    #[must_use]
    pub fn target(&self) -> &CounterTarget {
        &self.target
    }
}
