use super::*;
use crate::consts::{CONTACT_SENT_LABEL, PAGE_STYLES};
use crate::theme::MemoryStore;
use crate::visibility::{Fired, Group};

fn inventory() -> Inventory {
    Inventory {
        faq_items: 3,
        filter_values: vec!["all".to_owned(), "web".to_owned(), "ml".to_owned()],
        card_categories: vec![Some("web".to_owned()), Some("ml".to_owned()), None],
        floating_icons: 2,
        has_progress_bar: true,
        has_navbar: true,
    }
}

fn settings() -> PageSettings {
    PageSettings { recipient: "me@example.com".to_owned(), ..PageSettings::default() }
}

fn page() -> Page {
    Page::new(settings(), inventory(), Theme::Dark)
}

fn active_classes(muts: &[Mutation], role: Role) -> Vec<usize> {
    muts.iter()
        .filter_map(|m| match m {
            Mutation::AddClass { target, class: "active" } if target.role == role => Some(target.index),
            _ => None,
        })
        .collect()
}

fn display_of(muts: &[Mutation], index: usize) -> Option<&str> {
    muts.iter().find_map(|m| match m {
        Mutation::SetStyle { target, property: "display", value }
            if *target == Target::new(Role::ProjectCard, index) =>
        {
            Some(value.as_str())
        }
        _ => None,
    })
}

// =============================================================
// Menu
// =============================================================

#[test]
fn hamburger_toggles_both_elements() {
    let mut p = page();
    let muts = p.toggle_menu();
    assert!(p.menu_open());
    assert_eq!(
        muts,
        vec![
            Mutation::AddClass { target: Target::single(Role::Hamburger), class: "active" },
            Mutation::AddClass { target: Target::single(Role::NavMenu), class: "active" },
        ]
    );
    p.toggle_menu();
    assert!(!p.menu_open());
}

#[test]
fn nav_link_closes_menu() {
    let mut p = page();
    p.toggle_menu();
    let muts = p.close_menu();
    assert!(!p.menu_open());
    assert!(muts.iter().all(|m| matches!(m, Mutation::RemoveClass { class: "active", .. })));
}

// =============================================================
// FAQ
// =============================================================

#[test]
fn faq_opens_one_and_closes_rest() {
    let mut p = page();
    let muts = p.toggle_faq(1);
    assert_eq!(p.open_faq(), Some(1));
    assert_eq!(active_classes(&muts, Role::FaqItem), vec![1]);
    assert_eq!(muts.len(), 3);
}

#[test]
fn faq_at_most_one_open_after_each_click() {
    let mut p = page();
    for click in [0, 0, 2, 1, 1, 1, 0, 2] {
        let muts = p.toggle_faq(click);
        assert!(active_classes(&muts, Role::FaqItem).len() <= 1);
        assert_eq!(active_classes(&muts, Role::FaqItem).first().copied(), p.open_faq());
    }
}

#[test]
fn faq_click_out_of_range_is_noop() {
    let mut p = page();
    assert!(p.toggle_faq(10).is_empty());
}

// =============================================================
// Filter
// =============================================================

#[test]
fn initial_state_marks_catch_all_active() {
    let p = page();
    assert_eq!(p.active_filter(), Some("all"));
    assert_eq!(active_classes(&p.initial_mutations(), Role::FilterButton), vec![0]);
}

#[test]
fn filter_shows_matching_cards_only() {
    let mut p = page();
    let muts = p.select_filter(1);
    assert_eq!(p.active_filter(), Some("web"));
    assert_eq!(active_classes(&muts, Role::FilterButton), vec![1]);
    assert_eq!(display_of(&muts, 0), Some("block"));
    assert_eq!(display_of(&muts, 1), Some("none"));
    assert_eq!(display_of(&muts, 2), Some("none"));
    assert!(muts.contains(&Mutation::SetStyle {
        target: Target::new(Role::ProjectCard, 0),
        property: "animation",
        value: "fadeInUp 0.5s ease forwards".to_owned(),
    }));
}

#[test]
fn catch_all_shows_every_card() {
    let mut p = page();
    p.select_filter(2);
    let muts = p.select_filter(0);
    for i in 0..3 {
        assert_eq!(display_of(&muts, i), Some("block"));
    }
}

#[test]
fn filter_visibility_invariant_for_every_button() {
    let inv = inventory();
    let mut p = page();
    for (b, value) in inv.filter_values.iter().enumerate() {
        let muts = p.select_filter(b);
        assert_eq!(active_classes(&muts, Role::FilterButton), vec![b]);
        for (i, category) in inv.card_categories.iter().enumerate() {
            let visible = value == "all" || category.as_deref() == Some(value.as_str());
            assert_eq!(display_of(&muts, i) == Some("block"), visible);
        }
    }
}

#[test]
fn filter_without_buttons_is_noop() {
    let mut p = Page::new(settings(), Inventory::default(), Theme::Dark);
    assert!(p.select_filter(0).is_empty());
    assert_eq!(p.active_filter(), None);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn load_defaults_to_dark() {
    let p = Page::load(settings(), inventory(), &MemoryStore::default());
    assert_eq!(p.theme(), Theme::Dark);
}

#[test]
fn toggle_theme_twice_restores_store() {
    let mut store = MemoryStore::default();
    store.write("theme", "light");
    let mut p = Page::load(settings(), inventory(), &store);
    assert_eq!(p.theme(), Theme::Light);
    p.toggle_theme(&mut store);
    assert_eq!(store.read("theme").as_deref(), Some("dark"));
    let muts = p.toggle_theme(&mut store);
    assert_eq!(store.read("theme").as_deref(), Some("light"));
    assert_eq!(muts, Theme::Light.mutations());
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_updates_progress_and_parallax() {
    let mut p = page();
    let muts = p.on_scroll(ScrollMetrics::new(250.0, 1_500.0, 1_000.0));
    assert!(muts.contains(&style(Target::single(Role::ProgressBar), "width", "50%")));
    assert!(muts.iter().any(|m| matches!(
        m,
        Mutation::SetStyle { target, property: "transform", .. } if *target == Target::new(Role::FloatingIcon, 1)
    )));
}

#[test]
fn navbar_class_changes_only_on_crossing() {
    let mut p = page();
    let navbar = |muts: &[Mutation]| muts.iter().filter(|m| m.target() == Some(Target::single(Role::Navbar))).count();
    assert_eq!(navbar(&p.on_scroll(ScrollMetrics::new(10.0, 2_000.0, 800.0))), 0);
    assert_eq!(navbar(&p.on_scroll(ScrollMetrics::new(80.0, 2_000.0, 800.0))), 1);
    assert_eq!(navbar(&p.on_scroll(ScrollMetrics::new(120.0, 2_000.0, 800.0))), 0);
    let back = p.on_scroll(ScrollMetrics::new(0.0, 2_000.0, 800.0));
    assert!(back.contains(&Mutation::RemoveClass { target: Target::single(Role::Navbar), class: "scrolled" }));
}

#[test]
fn scroll_without_tracked_elements_is_empty() {
    let mut p = Page::new(settings(), Inventory::default(), Theme::Dark);
    assert!(p.on_scroll(ScrollMetrics::new(300.0, 2_000.0, 800.0)).is_empty());
}

// =============================================================
// Contact
// =============================================================

fn contact() -> ContactMessage {
    ContactMessage {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: String::new(),
        message: "Hi".to_owned(),
    }
}

#[test]
fn submit_navigates_and_shows_sent_state() {
    let mut p = page();
    let sub = p.submit_contact(&contact());
    let Mutation::Navigate { href } = &sub.mutations[0] else {
        panic!("first mutation should navigate");
    };
    assert!(href.starts_with("mailto:me@example.com?subject=Portfolio%20Contact&body="));
    assert!(sub.mutations.contains(&Mutation::StashContent { target: Target::single(Role::SubmitButton) }));
    assert!(sub.mutations.contains(&Mutation::SetMarkup {
        target: Target::single(Role::SubmitButton),
        html: CONTACT_SENT_MARKUP,
    }));
    assert!(CONTACT_SENT_MARKUP.contains("checkmark-outline"));
    assert!(CONTACT_SENT_MARKUP.contains(CONTACT_SENT_LABEL));
    assert!(p.contact_sent_showing());
}

#[test]
fn reset_restores_button_and_clears_form() {
    let mut p = page();
    let sub = p.submit_contact(&contact());
    let muts = p.reset_contact(sub.reset);
    assert!(muts.contains(&Mutation::RestoreContent { target: Target::single(Role::SubmitButton) }));
    assert!(muts.contains(&Mutation::ResetForm { target: Target::single(Role::ContactForm) }));
    assert!(!p.contact_sent_showing());
    assert!(p.reset_contact(sub.reset).is_empty());
}

#[test]
fn resubmit_restarts_window_without_restashing() {
    let mut p = page();
    let first = p.submit_contact(&contact());
    let second = p.submit_contact(&contact());
    assert!(!second.mutations.iter().any(|m| matches!(m, Mutation::StashContent { .. })));
    assert!(p.reset_contact(first.reset).is_empty());
    assert!(p.contact_sent_showing());
    assert!(!p.reset_contact(second.reset).is_empty());
}

#[test]
fn page_styles_define_the_card_animation_and_menu_icon() {
    let name = CARD_ENTER_ANIMATION.split_whitespace().next().unwrap_or_default();
    assert!(PAGE_STYLES.contains(&format!("@keyframes {name}")));
    for bar in 1..=3 {
        assert!(PAGE_STYLES.contains(&format!(".hamburger.active .bar:nth-child({bar})")));
    }
}

#[test]
fn visibility_is_reachable_through_the_page() {
    let mut p = page();
    let arming = p.visibility_mut().register_reveal(0);
    assert_eq!(arming.len(), 1);
    assert!(p.visibility_mut().mark_observed(Group::Reveals, 0));
    let fired = p.visibility_mut().report(Group::Reveals, 0, 0.5, true);
    assert!(matches!(fired, Some(Fired::Mutations(_))));
    assert!(p.visibility_mut().report(Group::Reveals, 0, 0.9, true).is_none());
}
