//! Bootstrap: collect elements, build the page controller, and wire every
//! feature.
//!
//! ARCHITECTURE
//! ============
//! [`Host`] is the one shared object. Feature modules hold an `Rc<Host>` in
//! their listeners, call into [`behavior::page::Page`], and apply the returned
//! mutations through the element registry. Each feature initializer returns
//! `Result<(), DomError>`; [`mount`] logs failures and keeps going, so one
//! absent section never disables the rest of the page.

use std::cell::RefCell;
use std::rc::Rc;

use behavior::consts::PAGE_STYLES;
use behavior::mutation::{Mutation, Target};
use behavior::page::Page;
use behavior::slots::{AnimationSlots, Ticket};

use crate::config::SiteConfig;
use crate::features;
use crate::util::dom::{self, DomError};
use crate::util::elements::Elements;
use crate::util::storage::LocalStore;

pub struct Host {
    pub config: SiteConfig,
    pub elements: Elements,
    pub page: RefCell<Page>,
    pub slots: RefCell<AnimationSlots<Target>>,
    pub store: RefCell<LocalStore>,
}

impl Host {
    pub fn apply(&self, mutations: &[Mutation]) {
        self.elements.apply_all(mutations);
    }

    /// Run `f` against the controller and apply its mutations.
    pub fn update(&self, f: impl FnOnce(&mut Page) -> Vec<Mutation>) {
        let mutations = f(&mut self.page.borrow_mut());
        self.apply(&mutations);
    }

    /// Start an animation on `target`, cancelling any earlier one there.
    pub fn begin_animation(&self, target: Target) -> Ticket<Target> {
        self.slots.borrow_mut().begin(target)
    }

    #[must_use]
    pub fn is_live(&self, ticket: &Ticket<Target>) -> bool {
        self.slots.borrow().is_live(ticket)
    }

    pub fn finish_animation(&self, ticket: &Ticket<Target>) {
        self.slots.borrow_mut().finish(ticket);
    }
}

/// Entry point once the DOM is parsed.
pub fn mount() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&format!("portfolio: {err}").into());
            return;
        }
    };
    let (config, config_err) = SiteConfig::load(&document);
    init_logging(&config);
    if let Some(err) = config_err {
        log::warn!("{err}; using defaults");
    }

    if document.ready_state() == "loading" {
        let result = dom::listen(&document, "DOMContentLoaded", move |_| boot_and_report(config.clone()));
        if let Err(err) = result {
            log::warn!("could not defer bootstrap: {err}");
        }
    } else {
        boot_and_report(config);
    }
}

fn init_logging(config: &SiteConfig) {
    let level = config.log_level.parse::<log::Level>().unwrap_or(log::Level::Info);
    // A logger is already installed when the module is re-instantiated.
    let _ = console_log::init_with_level(level);
}

fn boot_and_report(config: SiteConfig) {
    if let Err(err) = boot(config) {
        log::warn!("bootstrap aborted: {err}");
    }
}

/// Build the host and initialise every feature.
///
/// # Errors
///
/// Fails only when the document itself or a selector query is unusable.
pub fn boot(config: SiteConfig) -> Result<Rc<Host>, DomError> {
    let document = dom::document()?;
    if let Err(err) = dom::install_styles(&document, PAGE_STYLES) {
        log::warn!("page styles not installed: {err}");
    }
    let elements = Elements::collect(&document, &config.selectors)?;
    let store = LocalStore::open();
    if !store.is_available() {
        log::debug!("localStorage unavailable; theme will not persist");
    }
    let page = Page::load(config.page_settings(), elements.inventory(), &store);

    let host = Rc::new(Host {
        config,
        elements,
        page: RefCell::new(page),
        slots: RefCell::new(AnimationSlots::new()),
        store: RefCell::new(store),
    });
    let initial = host.page.borrow().initial_mutations();
    host.apply(&initial);

    let results: [(&str, Result<(), DomError>); 11] = [
        ("navigation", features::nav::init(&host)),
        ("anchors", features::scroll::init_anchors(&host)),
        ("scroll effects", features::scroll::init(&host)),
        ("faq", features::faq::init(&host)),
        ("project filter", features::filter::init(&host)),
        ("theme toggle", features::theme::init(&host)),
        ("contact form", features::contact::init(&host)),
        ("visibility triggers", features::visibility::init(&host)),
        ("typing", features::typing::init(&host)),
        ("entrance", features::entrance::init(&host)),
        ("particles", crate::particles::launch(&host.config.particles_element_id)),
    ];
    let total = results.len();
    let mut active = 0;
    for (feature, result) in results {
        match result {
            Ok(()) => active += 1,
            Err(err) if err.is_missing() => log::debug!("{feature}: skipped, {err}"),
            Err(err) if err.is_degraded() => log::warn!("{feature}: running without it, {err}"),
            Err(err) => log::warn!("{feature}: {err}"),
        }
    }
    log::info!("portfolio ready: {active}/{total} features active");
    Ok(host)
}
