//! Feature wiring: one module per page behavior.
//!
//! Each `init` queries what it needs from the host's registry, attaches
//! listeners, observers, or timers, and returns [`DomError::Missing`] when its
//! section is not on the page.
//!
//! [`DomError::Missing`]: crate::util::dom::DomError::Missing

pub mod contact;
pub mod entrance;
pub mod faq;
pub mod filter;
pub mod nav;
pub mod scroll;
pub mod theme;
pub mod typing;
pub mod visibility;
