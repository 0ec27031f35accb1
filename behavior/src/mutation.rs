//! DOM mutation commands emitted by the engine.
//!
//! The engine addresses elements by [`Target`] (a role plus an index into the
//! host's query results for that role) and never holds element handles. The
//! host resolves each target and applies the mutation, silently skipping
//! targets it never found.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

/// Element roles the page recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The `<html>` element.
    Root,
    Body,
    Navbar,
    Hamburger,
    NavMenu,
    NavLink,
    FaqItem,
    FilterButton,
    ProjectCard,
    SkillBar,
    Counter,
    /// Generic fade-in element.
    Reveal,
    FloatingIcon,
    ProgressBar,
    ThemeToggle,
    ContactForm,
    SubmitButton,
    HeroTitle,
    TypingText,
    /// Direct child of the hero text block.
    HeroChild,
    /// First `main`/`section` element.
    PageContent,
}

/// An addressed element: `role` plus index into that role's query results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    pub role: Role,
    pub index: usize,
}

impl Target {
    #[must_use]
    pub const fn new(role: Role, index: usize) -> Self {
        Self { role, index }
    }

    /// Target for a role that only ever has one element.
    #[must_use]
    pub const fn single(role: Role) -> Self {
        Self { role, index: 0 }
    }
}

/// One run of text, optionally wrapped in the highlight span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub highlight: bool,
}

/// A single DOM write.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    /// Set an inline style property. An empty value clears it.
    SetStyle { target: Target, property: &'static str, value: String },
    SetAttribute { target: Target, name: &'static str, value: String },
    SetText { target: Target, text: String },
    /// Replace the element's markup with a fixed fragment.
    SetMarkup { target: Target, html: &'static str },
    /// Replace the element's children with plain and highlighted runs.
    SetSegments { target: Target, segments: Vec<TextSegment> },
    /// Remember the element's current markup so it can be restored later.
    StashContent { target: Target },
    /// Restore markup saved by [`Mutation::StashContent`].
    RestoreContent { target: Target },
    /// Reset a `<form>` element's fields.
    ResetForm { target: Target },
    /// Navigate the window to `href`.
    Navigate { href: String },
}

impl Mutation {
    /// The element this mutation writes to, if it addresses one.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::SetStyle { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::SetText { target, .. }
            | Self::SetMarkup { target, .. }
            | Self::SetSegments { target, .. }
            | Self::StashContent { target }
            | Self::RestoreContent { target }
            | Self::ResetForm { target } => Some(*target),
            Self::Navigate { .. } => None,
        }
    }
}

pub(crate) fn style(target: Target, property: &'static str, value: impl Into<String>) -> Mutation {
    Mutation::SetStyle { target, property, value: value.into() }
}

pub(crate) fn class(target: Target, class: &'static str, on: bool) -> Mutation {
    if on {
        Mutation::AddClass { target, class }
    } else {
        Mutation::RemoveClass { target, class }
    }
}
