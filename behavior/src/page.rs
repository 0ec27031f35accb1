//! The page controller.
//!
//! DESIGN
//! ======
//! Every piece of transient UI state (menu, accordion, filter, theme, contact
//! affordance, visibility triggers) lives on [`Page`] instead of being read
//! back from DOM classes. Event handlers call one method and apply the
//! returned mutations; the controller never sees an element.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::accordion::Accordion;
use crate::consts::{
    CARD_ENTER_ANIMATION, CONTACT_SENT_BACKGROUND, CONTACT_SENT_MARKUP, DEFAULT_CONTACT_SUBJECT, THEME_STORAGE_KEY,
};
use crate::filter::FilterBar;
use crate::mailto::ContactMessage;
use crate::mutation::{Mutation, Role, Target, class, style};
use crate::scroll::{ScrollMetrics, navbar_scrolled, parallax_offset, percent, progress_percent, translate_y};
use crate::theme::{self, PreferenceStore, Theme};
use crate::visibility::{Thresholds, Visibility};

/// Static settings for a page instance.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSettings {
    /// Address the contact form composes mail to.
    pub recipient: String,
    pub default_subject: String,
    pub theme_key: String,
    pub thresholds: Thresholds,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            default_subject: DEFAULT_CONTACT_SUBJECT.to_owned(),
            theme_key: THEME_STORAGE_KEY.to_owned(),
            thresholds: Thresholds::default(),
        }
    }
}

/// What the host found in the document at bootstrap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    pub faq_items: usize,
    /// `data-filter` of each filter button, in document order.
    pub filter_values: Vec<String>,
    /// `data-category` of each project card, in document order.
    pub card_categories: Vec<Option<String>>,
    pub floating_icons: usize,
    pub has_progress_bar: bool,
    pub has_navbar: bool,
}

/// Identifies one contact submission's pending reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetToken(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub mutations: Vec<Mutation>,
    /// Pass back to [`Page::reset_contact`] after the affordance delay.
    pub reset: ResetToken,
}

#[derive(Clone, Copy, Debug, Default)]
struct ContactState {
    generation: u64,
    showing_sent: bool,
}

#[derive(Clone, Debug)]
pub struct Page {
    settings: PageSettings,
    theme: Theme,
    menu_open: bool,
    accordion: Accordion,
    filter: Option<FilterBar>,
    card_categories: Vec<Option<String>>,
    floating_icons: usize,
    has_progress_bar: bool,
    has_navbar: bool,
    navbar_scrolled: bool,
    contact: ContactState,
    visibility: Visibility,
}

impl Page {
    #[must_use]
    pub fn new(settings: PageSettings, inventory: Inventory, theme: Theme) -> Self {
        let visibility = Visibility::new(settings.thresholds);
        Self {
            theme,
            menu_open: false,
            accordion: Accordion::new(inventory.faq_items),
            filter: FilterBar::new(inventory.filter_values),
            card_categories: inventory.card_categories,
            floating_icons: inventory.floating_icons,
            has_progress_bar: inventory.has_progress_bar,
            has_navbar: inventory.has_navbar,
            navbar_scrolled: false,
            contact: ContactState::default(),
            visibility,
            settings,
        }
    }

    /// Build a page whose theme comes from `store`.
    #[must_use]
    pub fn load(settings: PageSettings, inventory: Inventory, store: &impl PreferenceStore) -> Self {
        let theme = theme::load(store, &settings.theme_key);
        Self::new(settings, inventory, theme)
    }

    /// Writes that bring the document in line with the initial state.
    #[must_use]
    pub fn initial_mutations(&self) -> Vec<Mutation> {
        let mut out = self.theme.mutations();
        if let Some(filter) = &self.filter {
            out.extend(filter_button_classes(filter));
        }
        out
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn open_faq(&self) -> Option<usize> {
        self.accordion.open_item()
    }

    #[must_use]
    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_ref().map(FilterBar::active_value)
    }

    pub fn visibility_mut(&mut self) -> &mut Visibility {
        &mut self.visibility
    }

    // --- Navigation ---

    /// Hamburger click.
    pub fn toggle_menu(&mut self) -> Vec<Mutation> {
        self.menu_open = !self.menu_open;
        self.menu_classes()
    }

    /// Nav link click.
    pub fn close_menu(&mut self) -> Vec<Mutation> {
        self.menu_open = false;
        self.menu_classes()
    }

    fn menu_classes(&self) -> Vec<Mutation> {
        vec![
            class(Target::single(Role::Hamburger), "active", self.menu_open),
            class(Target::single(Role::NavMenu), "active", self.menu_open),
        ]
    }

    // --- FAQ ---

    /// Question click on FAQ item `index`.
    pub fn toggle_faq(&mut self, index: usize) -> Vec<Mutation> {
        if index >= self.accordion.len() {
            return Vec::new();
        }
        let open = self.accordion.toggle(index);
        (0..self.accordion.len())
            .map(|i| class(Target::new(Role::FaqItem, i), "active", open == Some(i)))
            .collect()
    }

    // --- Project filter ---

    /// Click on filter button `index`.
    pub fn select_filter(&mut self, index: usize) -> Vec<Mutation> {
        let Some(filter) = self.filter.as_mut() else {
            return Vec::new();
        };
        if !filter.select(index) {
            return Vec::new();
        }
        let mut out = filter_button_classes(filter);
        for (i, category) in self.card_categories.iter().enumerate() {
            let target = Target::new(Role::ProjectCard, i);
            if filter.shows(category.as_deref()) {
                out.push(style(target, "display", "block"));
                out.push(style(target, "animation", CARD_ENTER_ANIMATION));
            } else {
                out.push(style(target, "display", "none"));
            }
        }
        out
    }

    // --- Theme ---

    /// Theme toggle click: flip, persist, apply.
    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> Vec<Mutation> {
        self.theme = theme::toggle(store, &self.settings.theme_key, self.theme);
        self.theme.mutations()
    }

    // --- Scroll ---

    /// Window scroll: progress bar, parallax, navbar state.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Vec<Mutation> {
        let mut out = Vec::new();
        if self.has_progress_bar {
            out.push(style(Target::single(Role::ProgressBar), "width", percent(progress_percent(metrics))));
        }
        for index in 0..self.floating_icons {
            let offset = parallax_offset(metrics.scroll_top, index);
            out.push(style(Target::new(Role::FloatingIcon, index), "transform", translate_y(offset)));
        }
        if self.has_navbar {
            let scrolled = navbar_scrolled(metrics.scroll_top);
            if scrolled != self.navbar_scrolled {
                self.navbar_scrolled = scrolled;
                out.push(class(Target::single(Role::Navbar), "scrolled", scrolled));
            }
        }
        out
    }

    // --- Contact ---

    /// Form submit: hand off to the mail client and show the sent state.
    ///
    /// A submit while the sent state is showing restarts its timer; the older
    /// token's reset becomes a no-op.
    pub fn submit_contact(&mut self, message: &ContactMessage) -> ContactSubmission {
        let button = Target::single(Role::SubmitButton);
        let mut mutations = vec![Mutation::Navigate {
            href: message.to_mailto(&self.settings.recipient, &self.settings.default_subject),
        }];
        if !self.contact.showing_sent {
            mutations.push(Mutation::StashContent { target: button });
        }
        mutations.push(Mutation::SetMarkup { target: button, html: CONTACT_SENT_MARKUP });
        mutations.push(style(button, "background", CONTACT_SENT_BACKGROUND));

        self.contact.showing_sent = true;
        self.contact.generation += 1;
        ContactSubmission { mutations, reset: ResetToken(self.contact.generation) }
    }

    /// Restore the button and clear the form, if `token` is still current.
    pub fn reset_contact(&mut self, token: ResetToken) -> Vec<Mutation> {
        if !self.contact.showing_sent || token.0 != self.contact.generation {
            return Vec::new();
        }
        self.contact.showing_sent = false;
        let button = Target::single(Role::SubmitButton);
        vec![
            Mutation::RestoreContent { target: button },
            style(button, "background", ""),
            Mutation::ResetForm { target: Target::single(Role::ContactForm) },
        ]
    }

    #[must_use]
    pub fn contact_sent_showing(&self) -> bool {
        self.contact.showing_sent
    }
}

fn filter_button_classes(filter: &FilterBar) -> Vec<Mutation> {
    (0..filter.len())
        .map(|i| class(Target::new(Role::FilterButton, i), "active", i == filter.active_index()))
        .collect()
}
