use super::*;

#[test]
fn missing_is_distinguished_from_other_failures() {
    assert!(DomError::Missing { selector: ".faq-item".to_owned() }.is_missing());
    assert!(!DomError::NoWindow.is_missing());
    assert!(!DomError::Unsupported("IntersectionObserver").is_missing());
}

#[test]
fn messages_name_the_cause() {
    assert_eq!(
        DomError::Missing { selector: "#contactForm".to_owned() }.to_string(),
        "no element matches \"#contactForm\""
    );
    assert_eq!(
        DomError::Unsupported("IntersectionObserver").to_string(),
        "IntersectionObserver is not available"
    );
    assert_eq!(
        DomError::Js { context: "querySelector", message: "bad selector".to_owned() }.to_string(),
        "querySelector: bad selector"
    );
}

#[test]
fn unsupported_capability_is_degraded_not_missing() {
    let err = DomError::Unsupported("IntersectionObserver");
    assert!(err.is_degraded());
    assert!(!err.is_missing());
    assert!(!DomError::Missing { selector: "#particles-js".to_owned() }.is_degraded());
    assert!(!DomError::Js { context: "particlesJS", message: "boom".to_owned() }.is_degraded());
}
