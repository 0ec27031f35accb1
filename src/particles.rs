//! Particle background.
//!
//! The particle library is a page-level script; this module only hands it the
//! static configuration once at startup.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use serde_json::{Value, json};

pub const PARTICLE_COLOR: &str = "#6366f1";
pub const PARTICLE_COUNT: u32 = 80;
pub const LINK_DISTANCE: u32 = 150;

/// Static configuration passed to `particlesJS`.
#[must_use]
pub fn particle_config() -> Value {
    json!({
        "particles": {
            "number": { "value": PARTICLE_COUNT, "density": { "enable": true, "value_area": 800 } },
            "color": { "value": PARTICLE_COLOR },
            "shape": { "type": "circle" },
            "opacity": { "value": 0.5, "random": false },
            "size": { "value": 3, "random": true },
            "line_linked": {
                "enable": true,
                "distance": LINK_DISTANCE,
                "color": PARTICLE_COLOR,
                "opacity": 0.4,
                "width": 1
            },
            "move": { "enable": true, "speed": 2, "direction": "none", "out_mode": "out" }
        },
        "interactivity": {
            "detect_on": "canvas",
            "events": {
                "onhover": { "enable": true, "mode": "grab" },
                "onclick": { "enable": true, "mode": "push" },
                "resize": true
            },
            "modes": {
                "grab": { "distance": 140, "line_linked": { "opacity": 1 } },
                "push": { "particles_nb": 4 }
            }
        },
        "retina_detect": true
    })
}

/// Invoke `window.particlesJS(element_id, config)`.
///
/// # Errors
///
/// [`DomError::Missing`] when the host element is absent. A page without the
/// library loaded is a no-op.
#[cfg(feature = "hydrate")]
pub fn launch(element_id: &str) -> Result<(), crate::util::dom::DomError> {
    use crate::util::dom::{self, DomError};
    use wasm_bindgen::{JsCast, JsValue};

    let window = dom::window()?;
    let document = dom::document()?;
    if document.get_element_by_id(element_id).is_none() {
        return Err(DomError::Missing { selector: format!("#{element_id}") });
    }
    let entry = js_sys::Reflect::get(&window, &JsValue::from_str("particlesJS"))
        .map_err(|err| DomError::js("read particlesJS", &err))?;
    if !entry.is_function() {
        log::debug!("particlesJS not loaded; no particle background");
        return Ok(());
    }
    let entry: js_sys::Function = entry.unchecked_into();
    let config = js_sys::JSON::parse(&particle_config().to_string()).map_err(|err| DomError::js("encode particle config", &err))?;
    entry
        .call2(&JsValue::NULL, &JsValue::from_str(element_id), &config)
        .map_err(|err| DomError::js("particlesJS", &err))?;
    Ok(())
}
