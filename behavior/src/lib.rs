//! Page behavior engine for the portfolio site.
//!
//! This crate holds every piece of state and timing logic behind the page's
//! interactive chrome: one-shot visibility triggers, scroll-position effects,
//! eased frame animations, the typing loop, and the menu/FAQ/filter/theme/
//! contact toggles. It never touches the DOM. Operations return
//! [`mutation::Mutation`] lists that the WASM host (`portfolio`) applies to
//! real elements, which keeps the whole engine testable on the native target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | The single controller owning transient UI state |
//! | [`visibility`] | Per-role one-shot trigger groups and their effects |
//! | [`trigger`] | Generic `pending → observed → triggered` state table |
//! | [`scroll`] | Progress bar, parallax, and anchor offset math |
//! | [`easing`] | Interpolation curves |
//! | [`tween`] | Timestamp-driven animations (smooth scroll, counter ramp) |
//! | [`slots`] | Cancellation tickets for running animations |
//! | [`counter`] | Counter target parsing and display formatting |
//! | [`typing`] | Typing loop and one-pass title reveal |
//! | [`accordion`] | FAQ accordion (at most one open item) |
//! | [`filter`] | Project filter bar |
//! | [`theme`] | Theme preference and its persistence seam |
//! | [`mailto`] | Contact message to `mailto:` URI composition |
//! | [`entrance`] | Load-time staggered entrance effects |
//! | [`mutation`] | DOM mutation commands and element addressing |
//! | [`consts`] | Shared timing and geometry constants |

pub mod accordion;
pub mod consts;
pub mod counter;
pub mod easing;
pub mod entrance;
pub mod filter;
pub mod mailto;
pub mod mutation;
pub mod page;
pub mod scroll;
pub mod slots;
pub mod theme;
pub mod trigger;
pub mod tween;
pub mod typing;
pub mod visibility;
