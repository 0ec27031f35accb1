//! Browser glue shared across feature modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys concerns (lookups, listeners, storage,
//! frame scheduling) so feature modules read as engine calls plus wiring.

pub mod dom;
#[cfg(feature = "hydrate")]
pub mod elements;
#[cfg(feature = "hydrate")]
pub mod frame;
pub mod storage;
