//! Mobile navigation: hamburger toggle and close-on-link-click.

use std::rc::Rc;

use behavior::mutation::{Role, Target};

use crate::app::Host;
use crate::util::dom::{self, DomError};

pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    let hamburger = host.elements.get(Target::single(Role::Hamburger)).map_err(|_| DomError::Missing {
        selector: host.config.selectors.hamburger.clone(),
    })?;
    let on_toggle = Rc::clone(host);
    dom::listen(hamburger, "click", move |_| on_toggle.update(|page| page.toggle_menu()))?;

    for link in host.elements.all(Role::NavLink) {
        let on_close = Rc::clone(host);
        dom::listen(link, "click", move |_| on_close.update(|page| page.close_menu()))?;
    }
    Ok(())
}
