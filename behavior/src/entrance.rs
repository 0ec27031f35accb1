//! Load-time entrance effects.
//!
//! Elements start hidden and offset, then each scheduled [`Stage`] switches
//! on a transition back to rest. The host applies the initial mutations
//! immediately and each stage after its delay.

#[cfg(test)]
#[path = "entrance_test.rs"]
mod entrance_test;

use crate::consts::{HERO_STAGGER_MS, PAGE_CONTENT_DELAY_MS};
use crate::mutation::{Mutation, Role, Target, style};

const ENTRANCE_TRANSITION: &str = "all 0.6s ease";

/// Mutations to apply once `delay_ms` has elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub delay_ms: u32,
    pub mutations: Vec<Mutation>,
}

fn hidden(target: Target, offset_px: u32) -> Vec<Mutation> {
    vec![style(target, "opacity", "0"), style(target, "transform", format!("translateY({offset_px}px)"))]
}

fn shown(target: Target) -> Vec<Mutation> {
    vec![
        style(target, "transition", ENTRANCE_TRANSITION),
        style(target, "opacity", "1"),
        style(target, "transform", "translateY(0)"),
    ]
}

/// Immediate writes for the window `load` event with `hero_children` hero
/// text children.
#[must_use]
pub fn on_load(hero_children: usize) -> Vec<Mutation> {
    let mut out = vec![Mutation::AddClass { target: Target::single(Role::Body), class: "loaded" }];
    for index in 0..hero_children {
        out.extend(hidden(Target::new(Role::HeroChild, index), 30));
    }
    out
}

/// Staggered reveal of the hero children, `index * 200` ms apart.
#[must_use]
pub fn hero_stages(hero_children: usize) -> Vec<Stage> {
    (0..hero_children)
        .map(|index| Stage {
            delay_ms: u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(HERO_STAGGER_MS)),
            mutations: shown(Target::new(Role::HeroChild, index)),
        })
        .collect()
}

/// Immediate writes on DOM ready for the main content block.
#[must_use]
pub fn page_content_initial() -> Vec<Mutation> {
    hidden(Target::single(Role::PageContent), 20)
}

#[must_use]
pub fn page_content_stage() -> Stage {
    Stage { delay_ms: PAGE_CONTENT_DELAY_MS, mutations: shown(Target::single(Role::PageContent)) }
}
