//! Project filter buttons.

use std::rc::Rc;

use behavior::mutation::Role;

use crate::app::Host;
use crate::util::dom::{self, DomError};

pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    let buttons = host.elements.all(Role::FilterButton);
    if buttons.is_empty() {
        return Err(DomError::Missing { selector: host.config.selectors.filter_buttons.clone() });
    }
    for (index, button) in buttons.iter().enumerate() {
        let host = Rc::clone(host);
        dom::listen(button, "click", move |_| host.update(|page| page.select_filter(index)))?;
    }
    Ok(())
}
