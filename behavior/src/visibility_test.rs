use super::*;
use crate::trigger::TriggerState;

#[test]
fn skill_bar_fills_to_data_width_once() {
    let mut vis = Visibility::default();
    assert!(vis.register_skill_bar(0, Some("85%")));
    vis.mark_observed(Group::SkillBars, 0);

    assert_eq!(vis.report(Group::SkillBars, 0, 0.3, true), None);
    assert_eq!(
        vis.report(Group::SkillBars, 0, 0.6, true),
        Some(Fired::Mutations(vec![style(Target::new(Role::SkillBar, 0), "width", "85%")]))
    );
    assert_eq!(vis.report(Group::SkillBars, 0, 1.0, true), None);
    assert_eq!(vis.group(Group::SkillBars).state(0), Some(TriggerState::Triggered));
}

#[test]
fn skill_bar_without_width_is_skipped() {
    let mut vis = Visibility::default();
    assert!(!vis.register_skill_bar(0, None));
    assert!(!vis.register_skill_bar(1, Some("  ")));
    assert!(vis.group(Group::SkillBars).is_empty());
}

#[test]
fn counter_fires_with_parsed_goal() {
    let mut vis = Visibility::default();
    vis.register_counter(2, Some("42"), "0+").expect("valid counter");
    let fired = vis.report(Group::Counters, 2, 0.9, true);
    assert_eq!(
        fired,
        Some(Fired::Counter {
            target: Target::new(Role::Counter, 2),
            goal: CounterTarget { value: 42, suffix: "+".to_owned() },
        })
    );
    assert_eq!(vis.report(Group::Counters, 2, 0.9, true), None);
}

#[test]
fn malformed_counter_is_rejected_not_tracked() {
    let mut vis = Visibility::default();
    assert!(vis.register_counter(0, None, "lots").is_err());
    assert_eq!(vis.report(Group::Counters, 0, 1.0, true), None);
}

#[test]
fn reveal_arms_with_fade_in_and_fires_visible() {
    let mut vis = Visibility::default();
    let t = Target::new(Role::Reveal, 1);
    assert_eq!(vis.register_reveal(1), vec![Mutation::AddClass { target: t, class: "fade-in" }]);
    assert!(vis.register_reveal(1).is_empty());
    assert_eq!(vis.report(Group::Reveals, 1, 0.05, true), None);
    let fired = vis.report(Group::Reveals, 1, 0.1, true);
    assert_eq!(
        fired,
        Some(Fired::Mutations(vec![
            Mutation::AddClass { target: t, class: "fade-in" },
            Mutation::AddClass { target: t, class: "visible" },
        ]))
    );
}

#[test]
fn every_element_fires_exactly_once_under_churn() {
    let mut vis = Visibility::default();
    for i in 0..5 {
        vis.register_skill_bar(i, Some("50%"));
        vis.register_counter(i, Some("10"), "").expect("valid");
        vis.register_reveal(i);
    }
    let mut fired = 0;
    for round in 0..20 {
        for group in Group::ALL {
            for i in 0..5 {
                let ratio = if (round + i) % 3 == 0 { 1.0 } else { 0.0 };
                if vis.report(group, i, ratio, ratio > 0.0).is_some() {
                    fired += 1;
                }
            }
        }
    }
    assert_eq!(fired, 15);
    assert!(vis.is_settled());
}

#[test]
fn custom_thresholds_apply_per_group() {
    let mut vis = Visibility::new(Thresholds { skill: 0.9, counter: 0.2, reveal: 0.5 });
    vis.register_skill_bar(0, Some("10%"));
    vis.register_counter(0, Some("3"), "").expect("valid");
    assert_eq!(vis.report(Group::SkillBars, 0, 0.5, true), None);
    assert!(vis.report(Group::Counters, 0, 0.25, true).is_some());
    assert_eq!(vis.group(Group::Reveals).threshold(), 0.5);
}
