//! FAQ accordion wiring.

use std::rc::Rc;

use behavior::mutation::Role;

use crate::app::Host;
use crate::util::dom::{self, DomError};

pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    let items = host.elements.all(Role::FaqItem);
    if items.is_empty() {
        return Err(DomError::Missing { selector: host.config.selectors.faq_items.clone() });
    }
    for (index, item) in items.iter().enumerate() {
        // Items without a question element cannot be opened.
        let Ok(question) = dom::query_one(item, &host.config.selectors.faq_question) else {
            log::debug!("faq item {index} has no question element");
            continue;
        };
        let host = Rc::clone(host);
        dom::listen(&question, "click", move |_| host.update(|page| page.toggle_faq(index)))?;
    }
    Ok(())
}
