//! Theme toggle button.
//!
//! The stored theme is applied during bootstrap by the page's initial
//! mutations; this module only handles the click.

use std::rc::Rc;

use behavior::mutation::{Role, Target};

use crate::app::Host;
use crate::util::dom::{self, DomError};

pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    let toggle = host.elements.get(Target::single(Role::ThemeToggle)).map_err(|_| DomError::Missing {
        selector: host.config.selectors.theme_toggle.clone(),
    })?;
    let host_for_click = Rc::clone(host);
    dom::listen(toggle, "click", move |_| {
        let mut store = host_for_click.store.borrow_mut();
        host_for_click.update(|page| page.toggle_theme(&mut *store));
        log::debug!("theme is now {}", host_for_click.page.borrow().theme().as_str());
    })
}
