//! Project filter bar.
//!
//! Exactly one button is active at any time. A card is visible when its
//! category matches the active filter value or the active value is the
//! catch-all.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Filter value that shows every card.
pub const CATCH_ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBar {
    values: Vec<String>,
    active: usize,
}

impl FilterBar {
    /// Build from each button's `data-filter` value. The initial active button
    /// is the catch-all one, or the first when there is none.
    #[must_use]
    pub fn new(values: Vec<String>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let active = values.iter().position(|v| v == CATCH_ALL).unwrap_or(0);
        Some(Self { values, active })
    }

    /// Activate button `index`. Returns `false` for an unknown index.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            return false;
        }
        self.active = index;
        true
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_value(&self) -> &str {
        &self.values[self.active]
    }

    #[must_use]
    pub fn shows(&self, category: Option<&str>) -> bool {
        let value = self.active_value();
        value == CATCH_ALL || category == Some(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
