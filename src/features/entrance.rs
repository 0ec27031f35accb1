//! Page entrance fades.

use std::rc::Rc;

use behavior::entrance::{self, Stage};
use behavior::mutation::Role;
use gloo_timers::callback::Timeout;

use crate::app::Host;
use crate::util::dom::{self, DomError};

pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    if host.elements.count(Role::PageContent) > 0 {
        host.apply(&entrance::page_content_initial());
        schedule(host, entrance::page_content_stage());
    }

    let document = dom::document()?;
    if document.ready_state() == "complete" {
        on_load(host);
        return Ok(());
    }
    let window = dom::window()?;
    let host = Rc::clone(host);
    dom::listen(&window, "load", move |_| on_load(&host))
}

fn on_load(host: &Rc<Host>) {
    let children = host.elements.count(Role::HeroChild);
    host.apply(&entrance::on_load(children));
    for stage in entrance::hero_stages(children) {
        schedule(host, stage);
    }
}

fn schedule(host: &Rc<Host>, stage: Stage) {
    let host = Rc::clone(host);
    Timeout::new(stage.delay_ms, move || host.apply(&stage.mutations)).forget();
}
