//! DOM host and the JavaScript entry point.

use super::config::parse_config;
use std::cell::RefCell;
use std::rc::Rc;
use tally_core::{Event, Mount, MountError, Tag};
use tally_widgets::Counter;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, MouseEvent};

/// [`Mount`] over the page's `document`.
pub struct DomMount {
    document: Document,
}

impl DomMount {
    /// Host bound to the global `window.document`.
    pub fn new() -> Result<Self, MountError> {
        let document = window()
            .ok_or_else(|| MountError::Host("No window".to_string()))?
            .document()
            .ok_or_else(|| MountError::Host("No document".to_string()))?;
        Ok(Self { document })
    }

    /// Host bound to a specific document.
    pub const fn from_document(document: Document) -> Self {
        Self { document }
    }
}

fn host_error(err: JsValue) -> MountError {
    MountError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl Mount for DomMount {
    type Node = Element;

    fn create_element(&mut self, tag: Tag) -> Result<Element, MountError> {
        self.document.create_element(tag.name()).map_err(host_error)
    }

    fn set_text(&mut self, node: &Element, text: &str) -> Result<(), MountError> {
        node.set_text_content(Some(text));
        Ok(())
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<(), MountError> {
        node.set_attribute(name, value).map_err(host_error)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), MountError> {
        parent.append_child(child).map(|_| ()).map_err(host_error)
    }
}

/// Mount a counter into `dom`.
///
/// `config` is any JS object with optional `start` and `step` numbers. The
/// click listener owns the widget and lives as long as the page.
#[wasm_bindgen]
pub fn mount_counter(config: JsValue, dom: &Element) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let json = if config.is_undefined() {
        None
    } else {
        // Throws on cycles and BigInt values.
        let text = js_sys::JSON::stringify(&config).map_err(|e| to_js(host_error(e)))?;
        Some(String::from(text))
    };
    let config = parse_config(json.as_deref()).map_err(to_js)?;

    let mut host = DomMount::new().map_err(to_js)?;
    let counter = Counter::mount(&config, &mut host, dom).map_err(to_js)?;
    let button = counter.button().clone();
    debug!(start = counter.start(), "counter mounted into DOM");

    let widget = Rc::new(RefCell::new((host, counter)));
    let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |_e: MouseEvent| {
        let mut guard = widget.borrow_mut();
        let (host, counter) = &mut *guard;
        let event = Event::click(counter.button().clone());
        if let Err(e) = counter.handle(host, &event) {
            web_sys::console::error_1(&to_js(e));
        }
    });
    button
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(|e| to_js(host_error(e)))?;
    // The DOM keeps the listener for the page lifetime.
    listener.forget();
    Ok(())
}
