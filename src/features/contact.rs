//! Contact form: compose a `mailto:` link and show a temporary sent state.

use std::rc::Rc;

use behavior::consts::CONTACT_RESET_MS;
use behavior::mailto::ContactMessage;
use behavior::mutation::{Role, Target};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement};

use crate::app::Host;
use crate::util::dom::{self, DomError};

pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    let form = host
        .elements
        .get(Target::single(Role::ContactForm))
        .map_err(|_| DomError::Missing { selector: host.config.selectors.contact_form.clone() })?
        .clone()
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| DomError::Unsupported("contact form that is not a <form>"))?;

    let host = Rc::clone(host);
    let target = form.clone();
    dom::listen(&target, "submit", move |event: Event| {
        event.prevent_default();
        let message = match read_message(&form) {
            Ok(message) => message,
            Err(err) => {
                log::warn!("contact form: {err}");
                return;
            }
        };
        let submission = host.page.borrow_mut().submit_contact(&message);
        host.apply(&submission.mutations);

        let reset = Rc::clone(&host);
        let token = submission.reset;
        Timeout::new(CONTACT_RESET_MS, move || reset.update(|page| page.reset_contact(token))).forget();
    })
}

fn read_message(form: &HtmlFormElement) -> Result<ContactMessage, DomError> {
    let data = FormData::new_with_form(form).map_err(|err| DomError::js("FormData", &err))?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactMessage {
        name: field("name"),
        email: field("email"),
        subject: field("subject"),
        message: field("message"),
    })
}
