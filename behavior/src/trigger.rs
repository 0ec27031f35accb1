//! One-shot viewport triggers.
//!
//! Each key moves through `Pending → Observed → Triggered` and reports
//! "fire now" exactly once, the first time its intersection ratio reaches the
//! threshold. Triggered keys are terminal: later reports are ignored no matter
//! how often the element re-enters the viewport.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use std::collections::HashMap;
use std::hash::Hash;

use crate::consts::THRESHOLD_EPSILON;

/// Lifecycle of a single trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    /// Registered but no observer attached yet.
    Pending,
    /// An observer is watching the element.
    Observed,
    /// The effect has fired; the element is no longer observed.
    Triggered,
}

/// A set of one-shot triggers sharing one visibility threshold.
#[derive(Clone, Debug)]
pub struct TriggerSet<K> {
    threshold: f64,
    states: HashMap<K, TriggerState>,
}

impl<K: Copy + Eq + Hash> TriggerSet<K> {
    /// Create an empty set. `threshold` is clamped to `[0, 1]`; NaN becomes 0.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
        Self { threshold, states: HashMap::new() }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register `key` as pending. Returns `false` if it was already known.
    pub fn register(&mut self, key: K) -> bool {
        if self.states.contains_key(&key) {
            return false;
        }
        self.states.insert(key, TriggerState::Pending);
        true
    }

    /// Record that an observer now watches `key`.
    pub fn mark_observed(&mut self, key: K) -> bool {
        match self.states.get_mut(&key) {
            Some(state @ TriggerState::Pending) => {
                *state = TriggerState::Observed;
                true
            }
            _ => false,
        }
    }

    /// Feed one intersection report. Returns `true` exactly once per key.
    pub fn report(&mut self, key: K, ratio: f64, is_intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(&key) else {
            return false;
        };
        if *state == TriggerState::Triggered || !is_intersecting {
            return false;
        }
        if ratio + THRESHOLD_EPSILON < self.threshold {
            return false;
        }
        *state = TriggerState::Triggered;
        true
    }

    #[must_use]
    pub fn state(&self, key: K) -> Option<TriggerState> {
        self.states.get(&key).copied()
    }

    /// Number of keys that have not fired yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.states.values().filter(|s| **s != TriggerState::Triggered).count()
    }

    /// True once every registered key has fired.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending_count() == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
