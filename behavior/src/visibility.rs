//! One-shot visibility groups and the effects they fire.
//!
//! Three groups share the [`TriggerSet`] machinery: skill bars fill to their
//! `data-width`, counters start a ramp, and generic reveal elements get the
//! `visible` class. Each element fires at most once per page load.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::collections::HashMap;

use crate::consts::{REVEAL_TRIGGER_THRESHOLD, SKILL_TRIGGER_THRESHOLD};
use crate::counter::{CounterParseError, CounterTarget};
use crate::mutation::{Mutation, Role, Target, style};
use crate::trigger::TriggerSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    SkillBars,
    Counters,
    Reveals,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::SkillBars, Group::Counters, Group::Reveals];

    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Self::SkillBars => Role::SkillBar,
            Self::Counters => Role::Counter,
            Self::Reveals => Role::Reveal,
        }
    }
}

/// Effect produced when an element fires.
#[derive(Clone, Debug, PartialEq)]
pub enum Fired {
    /// Apply these writes.
    Mutations(Vec<Mutation>),
    /// Start a counter ramp on `target`.
    Counter { target: Target, goal: CounterTarget },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub skill: f64,
    pub counter: f64,
    pub reveal: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { skill: SKILL_TRIGGER_THRESHOLD, counter: SKILL_TRIGGER_THRESHOLD, reveal: REVEAL_TRIGGER_THRESHOLD }
    }
}

#[derive(Clone, Debug)]
pub struct Visibility {
    skills: TriggerSet<usize>,
    counters: TriggerSet<usize>,
    reveals: TriggerSet<usize>,
    skill_widths: HashMap<usize, String>,
    counter_goals: HashMap<usize, CounterTarget>,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

impl Visibility {
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            skills: TriggerSet::new(thresholds.skill),
            counters: TriggerSet::new(thresholds.counter),
            reveals: TriggerSet::new(thresholds.reveal),
            skill_widths: HashMap::new(),
            counter_goals: HashMap::new(),
        }
    }

    #[must_use]
    pub fn group(&self, group: Group) -> &TriggerSet<usize> {
        match group {
            Group::SkillBars => &self.skills,
            Group::Counters => &self.counters,
            Group::Reveals => &self.reveals,
        }
    }

    fn group_mut(&mut self, group: Group) -> &mut TriggerSet<usize> {
        match group {
            Group::SkillBars => &mut self.skills,
            Group::Counters => &mut self.counters,
            Group::Reveals => &mut self.reveals,
        }
    }

    /// Register a skill bar. Bars without a usable width are not tracked.
    pub fn register_skill_bar(&mut self, index: usize, width: Option<&str>) -> bool {
        let Some(width) = width.map(str::trim).filter(|w| !w.is_empty()) else {
            return false;
        };
        self.skill_widths.insert(index, width.to_owned());
        self.skills.register(index)
    }

    /// Register a counter from its `data-target` attribute and text.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the counter untracked.
    pub fn register_counter(&mut self, index: usize, target_attr: Option<&str>, text: &str) -> Result<(), CounterParseError> {
        let goal = CounterTarget::parse(target_attr, text)?;
        self.counter_goals.insert(index, goal);
        self.counters.register(index);
        Ok(())
    }

    /// Register a reveal element; returns the writes that arm it.
    pub fn register_reveal(&mut self, index: usize) -> Vec<Mutation> {
        if !self.reveals.register(index) {
            return Vec::new();
        }
        vec![Mutation::AddClass { target: Target::new(Role::Reveal, index), class: "fade-in" }]
    }

    pub fn mark_observed(&mut self, group: Group, index: usize) -> bool {
        self.group_mut(group).mark_observed(index)
    }

    /// Feed an intersection report; returns the effect the first time the
    /// element qualifies.
    pub fn report(&mut self, group: Group, index: usize, ratio: f64, is_intersecting: bool) -> Option<Fired> {
        if !self.group_mut(group).report(index, ratio, is_intersecting) {
            return None;
        }
        let target = Target::new(group.role(), index);
        match group {
            Group::SkillBars => {
                let width = self.skill_widths.get(&index)?;
                Some(Fired::Mutations(vec![style(target, "width", width.clone())]))
            }
            Group::Counters => {
                let goal = self.counter_goals.get(&index)?.clone();
                Some(Fired::Counter { target, goal })
            }
            Group::Reveals => Some(Fired::Mutations(vec![
                Mutation::AddClass { target, class: "fade-in" },
                Mutation::AddClass { target, class: "visible" },
            ])),
        }
    }

    /// True once every registered element in every group has fired.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        Group::ALL.iter().all(|g| self.group(*g).is_settled())
    }
}
