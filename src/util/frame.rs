//! Self-rescheduling `requestAnimationFrame` loops.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};

use crate::util::dom::{self, DomError};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Call `step` with each frame timestamp until it returns `false`.
///
/// # Errors
///
/// Fails if there is no window or the first frame cannot be requested.
pub fn run<F>(mut step: F) -> Result<(), DomError>
where
    F: FnMut(f64) -> bool + 'static,
{
    let window = dom::window()?;
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !step(ts) {
            // Breaks the holder <-> closure cycle so the closure is freed.
            holder_for_cb.borrow_mut().take();
            return;
        }
        let requested = holder_for_cb
            .borrow()
            .as_ref()
            .map(|cb| window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()));
        if let Some(Err(err)) = requested {
            log::warn!("frame loop stopped: {err:?}");
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|err| DomError::js("requestAnimationFrame", &err))?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}
