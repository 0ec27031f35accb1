//! One-shot viewport triggers backed by `IntersectionObserver`.
//!
//! One observer per group. Elements are registered with the engine before
//! they are observed, marked observed right after, and unobserved as soon as
//! they fire, so each element produces its effect at most once.

use std::rc::Rc;

use behavior::counter::{CounterRamp, CounterTarget};
use behavior::mutation::{Mutation, Target};
use behavior::visibility::{Fired, Group};
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::Host;
use crate::util::dom::{self, DomError};
use crate::util::frame;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub fn init(host: &Rc<Host>) -> Result<(), DomError> {
    if Group::ALL.iter().all(|group| host.elements.count(group.role()) == 0) {
        return Err(DomError::Missing { selector: host.config.selectors.reveals.clone() });
    }
    let window = dom::window()?;
    let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
        .map_err(|err| DomError::js("IntersectionObserver lookup", &err))?;
    if !supported {
        return Err(DomError::Unsupported("IntersectionObserver"));
    }
    for group in Group::ALL {
        observe_group(host, group)?;
    }
    Ok(())
}

fn observe_group(host: &Rc<Host>, group: Group) -> Result<(), DomError> {
    let tracked = register(host, group);
    if tracked.is_empty() {
        log::debug!("{group:?}: nothing to observe");
        return Ok(());
    }

    let on_entries = Rc::clone(host);
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            handle_entry(&on_entries, group, &entry, &observer);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold(host, group)));
    if group == Group::Reveals {
        options.set_root_margin(&host.config.reveal_root_margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| DomError::js("IntersectionObserver", &err))?;
    // Observers live as long as the page.
    callback.forget();

    let elements = host.elements.all(group.role());
    for index in tracked {
        let Some(el) = elements.get(index) else {
            continue;
        };
        observer.observe(el);
        host.page.borrow_mut().visibility_mut().mark_observed(group, index);
    }
    Ok(())
}

fn threshold(host: &Host, group: Group) -> f64 {
    match group {
        Group::SkillBars => host.config.skill_threshold,
        Group::Counters => host.config.counter_threshold,
        Group::Reveals => host.config.reveal_threshold,
    }
}

/// Register every element of `group`; returns the indices being tracked.
fn register(host: &Host, group: Group) -> Vec<usize> {
    let mut tracked = Vec::new();
    let mut arming = Vec::new();
    {
        let mut page = host.page.borrow_mut();
        let visibility = page.visibility_mut();
        for (index, el) in host.elements.all(group.role()).iter().enumerate() {
            match group {
                Group::SkillBars => {
                    if visibility.register_skill_bar(index, el.get_attribute("data-width").as_deref()) {
                        tracked.push(index);
                    } else {
                        log::debug!("skill bar {index} has no data-width");
                    }
                }
                Group::Counters => {
                    let text = el.text_content().unwrap_or_default();
                    match visibility.register_counter(index, el.get_attribute("data-target").as_deref(), &text) {
                        Ok(()) => tracked.push(index),
                        Err(err) => log::warn!("counter {index} skipped: {err}"),
                    }
                }
                Group::Reveals => {
                    arming.extend(visibility.register_reveal(index));
                    tracked.push(index);
                }
            }
        }
    }
    host.apply(&arming);
    tracked
}

fn handle_entry(host: &Rc<Host>, group: Group, entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
    let target = entry.target();
    let Some(index) = host.elements.index_of(group.role(), &target) else {
        return;
    };
    let fired = host.page.borrow_mut().visibility_mut().report(
        group,
        index,
        entry.intersection_ratio(),
        entry.is_intersecting(),
    );
    let Some(fired) = fired else {
        return;
    };
    observer.unobserve(&target);
    match fired {
        Fired::Mutations(mutations) => host.apply(&mutations),
        Fired::Counter { target, goal } => {
            if let Err(err) = start_counter(host, target, goal) {
                log::warn!("counter {}: {err}", target.index);
            }
        }
    }
}

fn start_counter(host: &Rc<Host>, target: Target, goal: CounterTarget) -> Result<(), DomError> {
    let mut ramp = CounterRamp::new(goal);
    let ticket = host.begin_animation(target);
    let host = Rc::clone(host);
    frame::run(move |now| {
        if !host.is_live(&ticket) {
            return false;
        }
        let (text, done) = ramp.frame(now);
        host.apply(&[Mutation::SetText { target, text }]);
        if done {
            host.finish_animation(&ticket);
        }
        !done
    })
}
