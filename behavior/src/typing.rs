//! Typing effects.
//!
//! [`TypingMachine`] is the endless role rotator: it types a phrase, holds,
//! deletes it, holds, and moves to the next phrase. [`TitleReveal`] types a
//! heading once, inserting a highlighted name as a single unit.
//!
//! Both are pure step functions; the host owns the timers and calls `tick`
//! after the returned delay.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts::{DELETE_CHAR_MS, HOLD_EMPTY_MS, HOLD_FULL_MS, TYPE_CHAR_MS};
use crate::mutation::TextSegment;

/// What the machine is doing until its next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    /// Phrase complete; holding before deleting.
    PausingFull,
    Deleting,
    /// Phrase erased; holding before typing the next one.
    PausingEmpty,
}

/// Output of one tick: text to display and the wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingMachine {
    phrases: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: TypingPhase,
}

impl TypingMachine {
    /// Returns `None` for an empty phrase list. Empty phrases are allowed.
    #[must_use]
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases.into_iter().map(|p| p.as_ref().chars().collect()).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, index: 0, shown: 0, phase: TypingPhase::Typing })
    }

    /// Split a `data-roles` value: a JSON string array, or a comma list.
    #[must_use]
    pub fn parse_phrases(raw: &str) -> Vec<String> {
        if let Ok(list) = serde_json::from_str::<Vec<String>>(raw) {
            return list;
        }
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Advance one step.
    pub fn tick(&mut self) -> TypingStep {
        let delay_ms = match self.phase {
            TypingPhase::Typing => self.type_char(),
            TypingPhase::PausingFull => {
                self.phase = TypingPhase::Deleting;
                self.delete_char()
            }
            TypingPhase::Deleting => self.delete_char(),
            TypingPhase::PausingEmpty => {
                self.phase = TypingPhase::Typing;
                self.type_char()
            }
        };
        TypingStep { text: self.text(), delay_ms }
    }

    fn type_char(&mut self) -> u32 {
        let len = self.current().len();
        if self.shown < len {
            self.shown += 1;
        }
        if self.shown == len {
            self.phase = TypingPhase::PausingFull;
            HOLD_FULL_MS
        } else {
            TYPE_CHAR_MS
        }
    }

    fn delete_char(&mut self) -> u32 {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.phase = TypingPhase::PausingEmpty;
            self.index = (self.index + 1) % self.phrases.len();
            HOLD_EMPTY_MS
        } else {
            DELETE_CHAR_MS
        }
    }

    fn current(&self) -> &[char] {
        &self.phrases[self.index]
    }

    /// Currently displayed text.
    #[must_use]
    pub fn text(&self) -> String {
        self.current()[..self.shown].iter().collect()
    }

    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.index
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Unit {
    Char(char),
    Highlight(String),
}

/// One-pass typewriter for the hero title.
#[derive(Clone, Debug)]
pub struct TitleReveal {
    units: Vec<Unit>,
    shown: usize,
}

impl TitleReveal {
    /// Split `text` into typing units. The first occurrence of `highlight`
    /// (when non-empty) becomes a single highlighted unit.
    #[must_use]
    pub fn new(text: &str, highlight: Option<&str>) -> Self {
        let mut units = Vec::new();
        let split = highlight
            .filter(|h| !h.is_empty())
            .and_then(|h| text.find(h).map(|at| (at, h)));
        match split {
            Some((at, name)) => {
                units.extend(text[..at].chars().map(Unit::Char));
                units.push(Unit::Highlight(name.to_owned()));
                units.extend(text[at + name.len()..].chars().map(Unit::Char));
            }
            None => units.extend(text.chars().map(Unit::Char)),
        }
        Self { units, shown: 0 }
    }

    /// Reveal the next unit. Returns `None` once the whole title is shown.
    pub fn advance(&mut self) -> Option<Vec<TextSegment>> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.segments())
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.units.len()
    }

    /// Revealed content, with consecutive plain characters merged.
    #[must_use]
    pub fn segments(&self) -> Vec<TextSegment> {
        let mut out: Vec<TextSegment> = Vec::new();
        for unit in &self.units[..self.shown] {
            match unit {
                Unit::Char(c) => match out.last_mut() {
                    Some(last) if !last.highlight => last.text.push(*c),
                    _ => out.push(TextSegment { text: c.to_string(), highlight: false }),
                },
                Unit::Highlight(name) => out.push(TextSegment { text: name.clone(), highlight: true }),
            }
        }
        out
    }
}
