//! Element registry: resolves engine [`Target`]s to live DOM nodes and
//! applies [`Mutation`]s to them.
//!
//! ARCHITECTURE
//! ============
//! The registry is filled once at bootstrap from the configured selectors.
//! Roles whose selector matches nothing simply have no entries; mutations
//! aimed at them resolve to [`DomError::Missing`] and are dropped by
//! [`Elements::apply_all`] at debug level.

use std::cell::RefCell;
use std::collections::HashMap;

use behavior::mutation::{Mutation, Role, Target, TextSegment};
use behavior::page::Inventory;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement};

use crate::config::Selectors;
use crate::util::dom::{self, DomError};

pub struct Elements {
    document: Document,
    by_role: HashMap<Role, Vec<HtmlElement>>,
    stashed: RefCell<HashMap<Target, String>>,
}

impl Elements {
    /// Query every role from `selectors`.
    ///
    /// # Errors
    ///
    /// Only a throwing selector fails; unmatched selectors leave the role empty.
    pub fn collect(document: &Document, selectors: &Selectors) -> Result<Self, DomError> {
        let mut by_role: HashMap<Role, Vec<HtmlElement>> = HashMap::new();
        let many = [
            (Role::NavLink, &selectors.nav_links),
            (Role::FaqItem, &selectors.faq_items),
            (Role::FilterButton, &selectors.filter_buttons),
            (Role::ProjectCard, &selectors.project_cards),
            (Role::SkillBar, &selectors.skill_bars),
            (Role::Counter, &selectors.counters),
            (Role::Reveal, &selectors.reveals),
            (Role::FloatingIcon, &selectors.floating_icons),
            (Role::HeroChild, &selectors.hero_children),
        ];
        for (role, selector) in many {
            by_role.insert(role, dom::query_all(document, selector)?);
        }
        let single = [
            (Role::Navbar, &selectors.navbar),
            (Role::Hamburger, &selectors.hamburger),
            (Role::NavMenu, &selectors.nav_menu),
            (Role::ProgressBar, &selectors.progress_bar),
            (Role::ThemeToggle, &selectors.theme_toggle),
            (Role::ContactForm, &selectors.contact_form),
            (Role::HeroTitle, &selectors.hero_title),
            (Role::TypingText, &selectors.typing_text),
            (Role::PageContent, &selectors.page_content),
        ];
        for (role, selector) in single {
            by_role.insert(role, optional(dom::query_one(document, selector))?);
        }
        if let Some(form) = by_role.get(&Role::ContactForm).and_then(|f| f.first()) {
            let button = optional(dom::query_one(form, &selectors.submit_button))?;
            by_role.insert(Role::SubmitButton, button);
        }
        if let Some(root) = document.document_element().and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
            by_role.insert(Role::Root, vec![root]);
        }
        if let Some(body) = document.body() {
            by_role.insert(Role::Body, vec![body]);
        }
        Ok(Self { document: document.clone(), by_role, stashed: RefCell::new(HashMap::new()) })
    }

    #[must_use]
    pub fn all(&self, role: Role) -> &[HtmlElement] {
        self.by_role.get(&role).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn count(&self, role: Role) -> usize {
        self.all(role).len()
    }

    /// Resolve a target to its element.
    ///
    /// # Errors
    ///
    /// [`DomError::Missing`] when the role has no element at that index.
    pub fn get(&self, target: Target) -> Result<&HtmlElement, DomError> {
        self.all(target.role)
            .get(target.index)
            .ok_or_else(|| DomError::Missing { selector: format!("{:?}[{}]", target.role, target.index) })
    }

    /// Index of `node` within `role`'s elements.
    #[must_use]
    pub fn index_of(&self, role: Role, node: &web_sys::Node) -> Option<usize> {
        self.all(role).iter().position(|el| el.is_same_node(Some(node)))
    }

    /// What the page controller needs to know about the document.
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        Inventory {
            faq_items: self.count(Role::FaqItem),
            filter_values: self
                .all(Role::FilterButton)
                .iter()
                .map(|b| b.get_attribute("data-filter").unwrap_or_default())
                .collect(),
            card_categories: self
                .all(Role::ProjectCard)
                .iter()
                .map(|c| c.get_attribute("data-category"))
                .collect(),
            floating_icons: self.count(Role::FloatingIcon),
            has_progress_bar: self.count(Role::ProgressBar) > 0,
            has_navbar: self.count(Role::Navbar) > 0,
        }
    }

    /// Apply one mutation.
    ///
    /// # Errors
    ///
    /// [`DomError::Missing`] for an unresolved target, [`DomError::Js`] when
    /// the DOM call throws.
    pub fn apply(&self, mutation: &Mutation) -> Result<(), DomError> {
        match mutation {
            Mutation::AddClass { target, class } => self
                .get(*target)?
                .class_list()
                .add_1(class)
                .map_err(|err| DomError::js("classList.add", &err)),
            Mutation::RemoveClass { target, class } => self
                .get(*target)?
                .class_list()
                .remove_1(class)
                .map_err(|err| DomError::js("classList.remove", &err)),
            Mutation::SetStyle { target, property, value } => {
                let style = self.get(*target)?.style();
                if value.is_empty() {
                    style
                        .remove_property(property)
                        .map(|_| ())
                        .map_err(|err| DomError::js("style.removeProperty", &err))
                } else {
                    style
                        .set_property(property, value)
                        .map_err(|err| DomError::js("style.setProperty", &err))
                }
            }
            Mutation::SetAttribute { target, name, value } => self
                .get(*target)?
                .set_attribute(name, value)
                .map_err(|err| DomError::js("setAttribute", &err)),
            Mutation::SetText { target, text } => {
                self.get(*target)?.set_text_content(Some(text));
                Ok(())
            }
            Mutation::SetMarkup { target, html } => {
                self.get(*target)?.set_inner_html(html);
                Ok(())
            }
            Mutation::SetSegments { target, segments } => self.set_segments(*target, segments),
            Mutation::StashContent { target } => {
                let html = self.get(*target)?.inner_html();
                self.stashed.borrow_mut().entry(*target).or_insert(html);
                Ok(())
            }
            Mutation::RestoreContent { target } => {
                let el = self.get(*target)?;
                if let Some(html) = self.stashed.borrow_mut().remove(target) {
                    el.set_inner_html(&html);
                }
                Ok(())
            }
            Mutation::ResetForm { target } => {
                let form = self
                    .get(*target)?
                    .dyn_ref::<HtmlFormElement>()
                    .ok_or(DomError::Unsupported("form reset on a non-form element"))?;
                form.reset();
                Ok(())
            }
            Mutation::Navigate { href } => dom::window()?
                .location()
                .set_href(href)
                .map_err(|err| DomError::js("location.href", &err)),
        }
    }

    fn set_segments(&self, target: Target, segments: &[TextSegment]) -> Result<(), DomError> {
        let el = self.get(target)?;
        el.set_text_content(None);
        for segment in segments {
            if segment.highlight {
                let span = self
                    .document
                    .create_element("span")
                    .map_err(|err| DomError::js("createElement", &err))?;
                span.set_class_name("highlight");
                span.set_text_content(Some(&segment.text));
                el.append_child(&span).map_err(|err| DomError::js("appendChild", &err))?;
            } else {
                let text = self.document.create_text_node(&segment.text);
                el.append_child(&text).map_err(|err| DomError::js("appendChild", &err))?;
            }
        }
        Ok(())
    }

    /// Apply a batch, logging instead of failing.
    pub fn apply_all<'a>(&self, mutations: impl IntoIterator<Item = &'a Mutation>) {
        for mutation in mutations {
            match self.apply(mutation) {
                Ok(()) => {}
                Err(err) if err.is_missing() => log::debug!("skipped {mutation:?}: {err}"),
                Err(err) => log::warn!("{err}"),
            }
        }
    }
}

fn optional(found: Result<HtmlElement, DomError>) -> Result<Vec<HtmlElement>, DomError> {
    match found {
        Ok(el) => Ok(vec![el]),
        Err(err) if err.is_missing() => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}
