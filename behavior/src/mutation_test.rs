use super::*;

#[test]
fn single_target_uses_index_zero() {
    assert_eq!(Target::single(Role::Body), Target::new(Role::Body, 0));
}

#[test]
fn target_reports_addressed_element() {
    let t = Target::new(Role::FaqItem, 3);
    assert_eq!(Mutation::AddClass { target: t, class: "active" }.target(), Some(t));
    assert_eq!(Mutation::ResetForm { target: t }.target(), Some(t));
    assert_eq!(Mutation::SetMarkup { target: t, html: "<b>x</b>" }.target(), Some(t));
    assert_eq!(Mutation::Navigate { href: "mailto:x".into() }.target(), None);
}

#[test]
fn class_helper_picks_add_or_remove() {
    let t = Target::single(Role::Hamburger);
    assert_eq!(class(t, "active", true), Mutation::AddClass { target: t, class: "active" });
    assert_eq!(class(t, "active", false), Mutation::RemoveClass { target: t, class: "active" });
}

#[test]
fn style_helper_owns_value() {
    let t = Target::single(Role::ProgressBar);
    assert_eq!(
        style(t, "width", "50%"),
        Mutation::SetStyle { target: t, property: "width", value: "50%".to_owned() }
    );
}
