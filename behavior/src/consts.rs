//! Shared timing and geometry constants for the behavior crate.

// ── Visibility ──────────────────────────────────────────────────

/// Fraction of a skill bar or counter that must be visible before it fires.
pub const SKILL_TRIGGER_THRESHOLD: f64 = 0.5;

/// Fraction of a generic reveal element that must be visible before it fires.
pub const REVEAL_TRIGGER_THRESHOLD: f64 = 0.1;

/// Root margin applied to the reveal observer (shrinks the viewport bottom).
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Browsers report crossing ratios with float noise just under the threshold.
pub const THRESHOLD_EPSILON: f64 = 1e-3;

// ── Scroll ──────────────────────────────────────────────────────

/// Base parallax rate applied to the scroll offset.
pub const PARALLAX_RATE: f64 = -0.5;

/// Per-element parallax speed step (`(index + 1) * step`).
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

/// Height of the fixed navbar, subtracted from anchor scroll targets.
pub const NAVBAR_OFFSET_PX: f64 = 70.0;

/// Scroll offset past which the navbar is marked as scrolled.
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 50.0;

// ── Frame animations ────────────────────────────────────────────

/// Smooth-scroll duration.
pub const SMOOTH_SCROLL_MS: f64 = 1000.0;

/// Counter ramp duration.
pub const COUNTER_RAMP_MS: f64 = 2000.0;

// ── Typing ──────────────────────────────────────────────────────

pub const TYPE_CHAR_MS: u32 = 100;
pub const DELETE_CHAR_MS: u32 = 50;
pub const HOLD_FULL_MS: u32 = 2000;
pub const HOLD_EMPTY_MS: u32 = 500;

/// Delay before the one-pass title reveal starts.
pub const TITLE_REVEAL_START_MS: u32 = 500;

// ── Entrance ────────────────────────────────────────────────────

/// Stagger between consecutive hero children on load.
pub const HERO_STAGGER_MS: u32 = 200;

/// Delay before the main content block fades in.
pub const PAGE_CONTENT_DELAY_MS: u32 = 100;

// ── Contact ─────────────────────────────────────────────────────

/// How long the submit button shows the "sent" affordance.
pub const CONTACT_RESET_MS: u32 = 3000;

pub const DEFAULT_CONTACT_SUBJECT: &str = "Portfolio Contact";
pub const CONTACT_SENT_LABEL: &str = "Email Opened!";
/// Button markup while the sent state shows: check icon plus the label.
pub const CONTACT_SENT_MARKUP: &str = "<ion-icon name=\"checkmark-outline\"></ion-icon><span>Email Opened!</span>";
pub const CONTACT_SENT_BACKGROUND: &str = "linear-gradient(135deg, #10b981, #059669)";

// ── Page styles ─────────────────────────────────────────────────

/// Enter animation for project cards shown by the filter.
pub const CARD_ENTER_ANIMATION: &str = "fadeInUp 0.5s ease forwards";

/// Rules the behaviors rely on: the card enter keyframes and the hamburger's
/// open-state bars. Installed once at startup.
pub const PAGE_STYLES: &str = "\
@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
.hamburger.active .bar:nth-child(2) { opacity: 0; }
.hamburger.active .bar:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.hamburger.active .bar:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
";

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";
