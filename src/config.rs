//! Site configuration.
//!
//! Every field has a default that matches the stock page markup, so a page
//! without a config block behaves like the stock site. A page can override
//! any subset by embedding
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "contact_recipient": "me@example.com", "selectors": { "counters": ".stat" } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use behavior::consts::{
    DEFAULT_CONTACT_SUBJECT, REVEAL_ROOT_MARGIN, REVEAL_TRIGGER_THRESHOLD, SKILL_TRIGGER_THRESHOLD, THEME_STORAGE_KEY,
};
use behavior::page::PageSettings;
use behavior::visibility::Thresholds;
use serde::{Deserialize, Serialize};

/// Id of the inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} threshold {value} is outside [0, 1]")]
    Threshold { name: &'static str, value: f64 },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact_recipient: String,
    pub contact_default_subject: String,
    pub theme_storage_key: String,
    pub skill_threshold: f64,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub particles_element_id: String,
    /// `error`, `warn`, `info`, `debug`, or `trace`.
    pub log_level: String,
    pub selectors: Selectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_recipient: String::new(),
            contact_default_subject: DEFAULT_CONTACT_SUBJECT.to_owned(),
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            skill_threshold: SKILL_TRIGGER_THRESHOLD,
            counter_threshold: SKILL_TRIGGER_THRESHOLD,
            reveal_threshold: REVEAL_TRIGGER_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            particles_element_id: "particles-js".to_owned(),
            log_level: "info".to_owned(),
            selectors: Selectors::default(),
        }
    }
}

/// CSS selectors for every element role the host queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub hamburger: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub anchor_links: String,
    pub skill_bars: String,
    pub counters: String,
    pub reveals: String,
    pub filter_buttons: String,
    pub project_cards: String,
    pub faq_items: String,
    /// Clickable question inside each FAQ item.
    pub faq_question: String,
    pub contact_form: String,
    /// Submit button inside the contact form.
    pub submit_button: String,
    pub hero_title: String,
    pub typing_text: String,
    pub hero_children: String,
    pub floating_icons: String,
    pub progress_bar: String,
    pub theme_toggle: String,
    pub page_content: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_owned(),
            hamburger: ".hamburger".to_owned(),
            nav_menu: ".nav-menu".to_owned(),
            nav_links: ".nav-link".to_owned(),
            anchor_links: "a[href^=\"#\"]".to_owned(),
            skill_bars: ".skill-progress".to_owned(),
            counters: ".counter".to_owned(),
            reveals: ".service-card, .project-card, .skill-category, .contact-item, .achievement-card, .timeline-item"
                .to_owned(),
            filter_buttons: ".filter-btn".to_owned(),
            project_cards: ".project-card".to_owned(),
            faq_items: ".faq-item".to_owned(),
            faq_question: ".faq-question".to_owned(),
            contact_form: "#contactForm".to_owned(),
            submit_button: "button[type=\"submit\"]".to_owned(),
            hero_title: ".hero-title".to_owned(),
            typing_text: ".typing-text".to_owned(),
            hero_children: ".hero-text > *".to_owned(),
            floating_icons: ".floating-icon".to_owned(),
            progress_bar: ".scroll-progress".to_owned(),
            theme_toggle: ".theme-toggle".to_owned(),
            page_content: "main, section".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config blob. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, a threshold outside `[0, 1]`,
    /// or an unknown log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("skill", self.skill_threshold),
            ("counter", self.counter_threshold),
            ("reveal", self.reveal_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Threshold { name, value });
            }
        }
        if !matches!(self.log_level.as_str(), "error" | "warn" | "info" | "debug" | "trace") {
            return Err(ConfigError::LogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Settings handed to the page controller.
    #[must_use]
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            recipient: self.contact_recipient.clone(),
            default_subject: self.contact_default_subject.clone(),
            theme_key: self.theme_storage_key.clone(),
            thresholds: Thresholds {
                skill: self.skill_threshold,
                counter: self.counter_threshold,
                reveal: self.reveal_threshold,
            },
        }
    }

    /// Read the config block from `document`.
    ///
    /// A missing block yields defaults; a malformed one yields defaults plus
    /// the error so the caller can log it once logging is up.
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> (Self, Option<ConfigError>) {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return (Self::default(), None);
        };
        match Self::from_json(&raw) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}
