//! `localStorage`-backed preference store.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior. Without the `hydrate`
//! feature (native tests) reads find nothing and writes are dropped, so the
//! page falls back to the default theme.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use behavior::theme::PreferenceStore;

/// Handle to the origin's `localStorage`, if the browser grants one.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    #[cfg(feature = "hydrate")]
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open() -> Self {
        #[cfg(feature = "hydrate")]
        {
            // Storage access throws in some privacy modes; treat that as absent.
            let storage = web_sys::window().and_then(|w| w.local_storage().unwrap_or(None));
            Self { storage }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.storage.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage.as_ref()?.get_item(key).unwrap_or(None)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = &self.storage {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("theme preference not saved: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}
