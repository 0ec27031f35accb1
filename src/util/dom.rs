//! Typed boundary between the host and the browser DOM.
//!
//! Absence is an error value here rather than a silent early return: every
//! lookup yields `Result<_, DomError>`, and the bootstrap decides which
//! failures are worth a warning.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// No element matches a selector the feature requires.
    #[error("no element matches {selector:?}")]
    Missing { selector: String },
    /// A browser capability the feature needs is not available.
    #[error("{0} is not available")]
    Unsupported(&'static str),
    /// A DOM call threw.
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
}

impl DomError {
    /// Missing elements are expected on pages that omit a section.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// The browser lacks something the feature needs; the page still works.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    #[cfg(feature = "hydrate")]
    pub fn js(context: &'static str, err: &JsValue) -> Self {
        let message = err
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        Self::Js { context, message }
    }
}

#[cfg(feature = "hydrate")]
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

#[cfg(feature = "hydrate")]
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// First element under `scope` matching `selector`.
#[cfg(feature = "hydrate")]
pub fn query_one(scope: &impl QueryScope, selector: &str) -> Result<HtmlElement, DomError> {
    scope
        .query(selector)
        .map_err(|err| DomError::js("querySelector", &err))?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::Missing { selector: selector.to_owned() })
}

/// Every element under `scope` matching `selector`; empty is not an error.
#[cfg(feature = "hydrate")]
pub fn query_all(scope: &impl QueryScope, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    let list = scope.query_all(selector).map_err(|err| DomError::js("querySelectorAll", &err))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Like [`query_all`] but an empty result is [`DomError::Missing`].
#[cfg(feature = "hydrate")]
pub fn query_some(scope: &impl QueryScope, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    let found = query_all(scope, selector)?;
    if found.is_empty() {
        return Err(DomError::Missing { selector: selector.to_owned() });
    }
    Ok(found)
}

/// Anything that supports `querySelector`/`querySelectorAll`.
#[cfg(feature = "hydrate")]
pub trait QueryScope {
    fn query(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn query_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue>;
}

#[cfg(feature = "hydrate")]
impl QueryScope for Document {
    fn query(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

#[cfg(feature = "hydrate")]
impl QueryScope for HtmlElement {
    fn query(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// Attach a page-lifetime event listener.
#[cfg(feature = "hydrate")]
pub fn listen<T, F>(target: &T, event: &str, handler: F) -> Result<(), DomError>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| DomError::js("addEventListener", &err))?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

/// Append a `<style>` element holding `css` to the document head.
#[cfg(feature = "hydrate")]
pub fn install_styles(document: &Document, css: &str) -> Result<(), DomError> {
    let head = document.head().ok_or_else(|| DomError::Missing { selector: "head".to_owned() })?;
    let style = document.create_element("style").map_err(|err| DomError::js("createElement", &err))?;
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(|err| DomError::js("appendChild", &err))?;
    Ok(())
}

/// Current vertical scroll offset, document height, and viewport height.
#[cfg(feature = "hydrate")]
pub fn scroll_metrics() -> Result<behavior::scroll::ScrollMetrics, DomError> {
    let window = window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let scroll_top = window.scroll_y().map_err(|err| DomError::js("scrollY", &err))?;
    let viewport_height = window
        .inner_height()
        .map_err(|err| DomError::js("innerHeight", &err))?
        .as_f64()
        .unwrap_or(0.0);
    let document_height = document
        .document_element()
        .map_or(0.0, |el| f64::from(el.scroll_height()));
    Ok(behavior::scroll::ScrollMetrics::new(scroll_top, document_height, viewport_height))
}
