//! Theme preference.
//!
//! The preference is a two-valued setting persisted under one key. Reading is
//! lenient (absent or unrecognised values mean [`Theme::Dark`]); writing
//! always stores the canonical lowercase name.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::mutation::{Mutation, Role, Target, class};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// DOM writes that make this theme visible.
    #[must_use]
    pub fn mutations(self) -> Vec<Mutation> {
        let light = self == Self::Light;
        vec![
            Mutation::SetAttribute {
                target: Target::single(Role::Root),
                name: "data-theme",
                value: self.as_str().to_owned(),
            },
            class(Target::single(Role::Body), "light-theme", light),
            Mutation::SetAttribute {
                target: Target::single(Role::ThemeToggle),
                name: "aria-pressed",
                value: light.to_string(),
            },
        ]
    }
}

/// Persistent key-value store backing the preference (`localStorage` in the
/// browser).
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// In-memory store for hosts without persistence, and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Read the stored theme, defaulting to dark.
#[must_use]
pub fn load(store: &impl PreferenceStore, key: &str) -> Theme {
    store
        .read(key)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Flip `current`, persist the result, and return it.
pub fn toggle(store: &mut impl PreferenceStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    store.write(key, next.as_str());
    next
}
