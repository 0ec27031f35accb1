//! Typing effects: the rotating role line and the one-pass hero title.
//!
//! Both run as `spawn_local` tasks that sleep between ticks and stop as soon
//! as their animation ticket goes stale.

use std::rc::Rc;
use std::time::Duration;

use behavior::consts::{TITLE_REVEAL_START_MS, TYPE_CHAR_MS};
use behavior::mutation::{Mutation, Role, Target};
use behavior::typing::{TitleReveal, TypingMachine};
use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;

use crate::app::Host;
use crate::util::dom::DomError;

pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    let roles = start_roles(host);
    let title = start_title(host);
    match (roles, title) {
        (Err(err), Err(_)) => Err(err),
        (Err(err), Ok(())) | (Ok(()), Err(err)) => {
            log::debug!("typing: {err}");
            Ok(())
        }
        (Ok(()), Ok(())) => Ok(()),
    }
}

fn start_roles(host: &Rc<Host>) -> Result<(), DomError> {
    let target = Target::single(Role::TypingText);
    let el = host.elements.get(target).map_err(|_| DomError::Missing {
        selector: host.config.selectors.typing_text.clone(),
    })?;
    let raw = el.get_attribute("data-roles").unwrap_or_default();
    let Some(mut machine) = TypingMachine::new(TypingMachine::parse_phrases(&raw)) else {
        return Err(DomError::Missing { selector: format!("{}[data-roles]", host.config.selectors.typing_text) });
    };

    let ticket = host.begin_animation(target);
    let host = Rc::clone(host);
    spawn_local(async move {
        while host.is_live(&ticket) {
            let step = machine.tick();
            host.apply(&[Mutation::SetText { target, text: step.text }]);
            sleep(Duration::from_millis(step.delay_ms.into())).await;
        }
    });
    Ok(())
}

fn start_title(host: &Rc<Host>) -> Result<(), DomError> {
    let target = Target::single(Role::HeroTitle);
    let el = host.elements.get(target).map_err(|_| DomError::Missing {
        selector: host.config.selectors.hero_title.clone(),
    })?;
    let text = el.text_content().unwrap_or_default();
    let highlight = el.get_attribute("data-highlight");
    let mut reveal = TitleReveal::new(text.trim(), highlight.as_deref());
    host.apply(&[Mutation::SetSegments { target, segments: Vec::new() }]);

    let ticket = host.begin_animation(target);
    let host = Rc::clone(host);
    spawn_local(async move {
        sleep(Duration::from_millis(TITLE_REVEAL_START_MS.into())).await;
        while host.is_live(&ticket) {
            let Some(segments) = reveal.advance() else {
                host.finish_animation(&ticket);
                break;
            };
            host.apply(&[Mutation::SetSegments { target, segments }]);
            sleep(Duration::from_millis(TYPE_CHAR_MS.into())).await;
        }
    });
    Ok(())
}
