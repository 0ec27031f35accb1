//! Scroll-driven effects and smooth in-page anchors.

use std::rc::Rc;

use behavior::mutation::{Role, Target};
use behavior::scroll::anchor_target;
use behavior::tween::SmoothScroll;
use web_sys::Event;

use crate::app::Host;
use crate::util::dom::{self, DomError};
use crate::util::frame;

/// Progress bar, parallax icons, and the navbar's `scrolled` class.
pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    let tracked = [Role::ProgressBar, Role::FloatingIcon, Role::Navbar];
    if tracked.iter().all(|role| host.elements.count(*role) == 0) {
        return Err(DomError::Missing { selector: host.config.selectors.progress_bar.clone() });
    }
    let window = dom::window()?;
    let on_scroll = Rc::clone(host);
    dom::listen(&window, "scroll", move |_| refresh(&on_scroll))?;
    refresh(host);
    Ok(())
}

fn refresh(host: &Host) {
    match dom::scroll_metrics() {
        Ok(metrics) => host.update(|page| page.on_scroll(metrics)),
        Err(err) => log::debug!("scroll metrics unavailable: {err}"),
    }
}

/// Smooth scrolling for every `href="#..."` link.
pub fn init_anchors(host: &Rc<Host>) -> Result<(), DomError> {
    let document = dom::document()?;
    let links = dom::query_some(&document, &host.config.selectors.anchor_links)?;
    for link in links {
        let host = Rc::clone(host);
        let href = link.get_attribute("href").unwrap_or_default();
        dom::listen(&link, "click", move |event: Event| {
            event.prevent_default();
            if href.len() <= 1 {
                return;
            }
            if let Err(err) = scroll_to(&host, &href) {
                log::debug!("anchor {href}: {err}");
            }
        })?;
    }
    Ok(())
}

fn scroll_to(host: &Rc<Host>, href: &str) -> Result<(), DomError> {
    let window = dom::window()?;
    let section = dom::query_one(&dom::document()?, href)?;
    let start = window.scroll_y().map_err(|err| DomError::js("scrollY", &err))?;
    let mut tween = SmoothScroll::new(start, anchor_target(f64::from(section.offset_top())));

    let ticket = host.begin_animation(Target::single(Role::Root));
    let host = Rc::clone(host);
    frame::run(move |now| {
        if !host.is_live(&ticket) {
            return false;
        }
        let sample = tween.frame(now);
        window.scroll_to_with_x_and_y(0.0, sample.value);
        if sample.done {
            host.finish_animation(&ticket);
        }
        !sample.done
    })
}

