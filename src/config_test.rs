use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").expect("valid config");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn defaults_match_stock_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.contact_default_subject, "Portfolio Contact");
    assert_eq!(config.skill_threshold, 0.5);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(config.selectors.hamburger, ".hamburger");
    assert_eq!(config.selectors.contact_form, "#contactForm");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let raw = serde_json::json!({
        "contact_recipient": "me@example.com",
        "selectors": { "counters": ".stat-number" }
    })
    .to_string();
    let config = SiteConfig::from_json(&raw).expect("valid config");
    assert_eq!(config.contact_recipient, "me@example.com");
    assert_eq!(config.selectors.counters, ".stat-number");
    assert_eq!(config.selectors.faq_items, ".faq-item");
    assert_eq!(config.log_level, "info");
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(SiteConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let err = SiteConfig::from_json(r#"{"reveal_threshold": 1.5}"#).expect_err("invalid");
    assert!(matches!(err, ConfigError::Threshold { name: "reveal", .. }));
    assert_eq!(err.to_string(), "reveal threshold 1.5 is outside [0, 1]");
}

#[test]
fn unknown_log_level_is_rejected() {
    assert!(matches!(SiteConfig::from_json(r#"{"log_level": "loud"}"#), Err(ConfigError::LogLevel(_))));
}

#[test]
fn page_settings_carry_thresholds_and_contact() {
    let config = SiteConfig {
        contact_recipient: "a@b.c".to_owned(),
        skill_threshold: 0.75,
        ..SiteConfig::default()
    };
    let settings = config.page_settings();
    assert_eq!(settings.recipient, "a@b.c");
    assert_eq!(settings.thresholds.skill, 0.75);
    assert_eq!(settings.thresholds.reveal, 0.1);
    assert_eq!(settings.theme_key, "theme");
}

#[test]
fn config_round_trips_through_json() {
    let config = SiteConfig::default();
    let raw = serde_json::to_string(&config).expect("serialize");
    assert_eq!(SiteConfig::from_json(&raw).expect("parse"), config);
}
