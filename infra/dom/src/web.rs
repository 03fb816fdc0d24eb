//! Browser host backed by `web-sys`.

use fxhash::FxHashMap;
use js_sys::{JSON, Reflect};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::fmt;
use szn_domain::attributes::RequestedAttributes;
use szn_domain::constants::READY_EVENT;
use szn_domain::props::{PropertyValue, SelectProperty};
use szn_domain::script::{ScriptSource, ScriptTag};
use szn_kernel::host::{HostDocument, HostElement, HostError, ListenerId, ReadyHandler};
use szn_kernel::signal::{requested_attributes_from_detail, requested_attributes_from_value};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CustomEvent, Document, Element, Event, HtmlScriptElement};

fn dom_error(err: &JsValue) -> HostError {
    HostError::Dom { message: format!("{err:?}").into(), context: None }
}

/// Converts a JS value to a JSON tree through `JSON.stringify`.
fn to_json(value: &JsValue) -> Option<Value> {
    let text = JSON::stringify(value).ok()?.as_string()?;
    serde_json::from_str(&text).inspect_err(|e| debug!(error = %e, "Unreadable JS value")).ok()
}

/// The live page document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn create_script(&self, script: &ScriptTag) -> Result<HtmlScriptElement, HostError> {
        let element: HtmlScriptElement = self
            .document
            .create_element("script")
            .map_err(|e| dom_error(&e))?
            .dyn_into()
            .map_err(|_| HostError::from("created element is not a script"))?;

        match &script.source {
            ScriptSource::Remote(src) => {
                element.set_async(script.asynchronous);
                element.set_src(src);
            },
            ScriptSource::Inline(body) => element.set_text(body).map_err(|e| dom_error(&e))?,
        }
        for (name, value) in &script.attributes {
            element.set_attribute(name, value).map_err(|e| dom_error(&e))?;
        }
        Ok(element)
    }
}

impl HostDocument for WebDocument {
    fn append_to_head(&self, script: &ScriptTag) -> Result<(), HostError> {
        let head = self.document.head().ok_or_else(|| HostError::Dom {
            message: "document has no head".into(),
            context: None,
        })?;
        let element = self.create_script(script)?;
        head.append_child(&element).map_err(|e| dom_error(&e))?;
        Ok(())
    }
}

type ReadyClosure = Closure<dyn FnMut(Event)>;

/// A `<szn-select>` node in the live page.
pub struct WebSelectElement {
    element: Element,
    listeners: RefCell<FxHashMap<ListenerId, ReadyClosure>>,
    next_listener: Cell<u64>,
}

impl fmt::Debug for WebSelectElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebSelectElement")
            .field("element", &self.element.tag_name())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl WebSelectElement {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element, listeners: RefCell::default(), next_listener: Cell::new(0) }
    }

    fn get(&self, key: &str) -> JsValue {
        Reflect::get(&self.element, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
    }

    fn to_js(&self, value: &PropertyValue) -> JsValue {
        match value {
            PropertyValue::Unset => JsValue::UNDEFINED,
            PropertyValue::Number(number) => JsValue::from_f64(*number),
            PropertyValue::Text(text) => JsValue::from_str(text),
            PropertyValue::Element(id) => self
                .element
                .owner_document()
                .and_then(|document| document.get_element_by_id(id))
                .map_or_else(
                    || {
                        warn!(id = %id, "Dropdown container not found");
                        JsValue::UNDEFINED
                    },
                    JsValue::from,
                ),
        }
    }
}

impl HostElement for WebSelectElement {
    fn is_ready(&self) -> bool {
        self.get("isReady").as_bool().unwrap_or(false)
    }

    fn requested_attributes(&self) -> Option<RequestedAttributes> {
        let raw = self.get("requestedAttributes");
        if raw.is_undefined() || raw.is_null() {
            return None;
        }
        requested_attributes_from_value(&to_json(&raw)?)
    }

    fn set_property(&self, property: SelectProperty, value: &PropertyValue) -> Result<(), HostError> {
        let assigned =
            Reflect::set(&self.element, &JsValue::from_str(property.js_name()), &self.to_js(value))
                .map_err(|e| dom_error(&e))?;
        if assigned {
            Ok(())
        } else {
            Err(HostError::Dom {
                message: format!("property {} is read-only", property.js_name()).into(),
                context: None,
            })
        }
    }

    fn add_ready_listener(&self, handler: ReadyHandler) -> Result<ListenerId, HostError> {
        let closure = ReadyClosure::new(move |event: Event| {
            let Some(event) = event.dyn_ref::<CustomEvent>() else {
                debug!("Ready event without detail ignored");
                return;
            };
            if let Some(attributes) = to_json(&event.detail()).as_ref().and_then(requested_attributes_from_detail) {
                handler(attributes);
            }
        });

        self.element
            .add_event_listener_with_callback(READY_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;

        let id = ListenerId::new(self.next_listener.get());
        self.next_listener.set(id.get() + 1);
        self.listeners.borrow_mut().insert(id, closure);
        Ok(id)
    }

    fn remove_ready_listener(&self, id: ListenerId) -> Result<(), HostError> {
        let closure = self.listeners.borrow_mut().remove(&id).ok_or_else(|| HostError::UnknownListener {
            message: format!("listener {} is not registered", id.get()).into(),
            context: None,
        })?;
        self.element
            .remove_event_listener_with_callback(READY_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))
    }
}
