//! `web-sys` implementation of the DOM seam.
//!
//! Listeners are attached with `gloo::events::EventListener` in non-passive mode,
//! since both drop-zone handlers call `preventDefault()`. Listener handles are
//! `forget()`-ed: drop zones keep their handlers for the lifetime of the page.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Event;

use crate::dom::{marker_selector, Document, DragEvent, DragEventKind, DragHandler, DroppedFile, DropTarget};
use crate::errors::FrontendError;

pub(crate) fn js_error(value: JsValue) -> FrontendError {
    FrontendError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// A live browser document.
#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the global window.
    pub fn from_window() -> Result<Self, FrontendError> {
        let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
        let document = window.document().ok_or(FrontendError::NoDocument)?;
        Ok(Self::new(document))
    }

    pub fn raw(&self) -> &web_sys::Document {
        &self.document
    }

    /// `true` once the initial markup has been parsed.
    pub fn is_structure_ready(&self) -> bool {
        self.document.ready_state() != "loading"
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn query_marked(&self, attribute: &str) -> Result<Vec<WebElement>, FrontendError> {
        let nodes = self
            .document
            .query_selector_all(&marker_selector(attribute))
            .map_err(js_error)?;

        let mut elements = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                elements.push(WebElement { element });
            }
        }
        Ok(elements)
    }
}

/// An element of a [`WebDocument`].
pub struct WebElement {
    element: web_sys::Element,
}

impl DropTarget for WebElement {
    fn add_drag_listener(&self, kind: DragEventKind, handler: DragHandler) -> Result<(), FrontendError> {
        let listener = EventListener::new_with_options(
            &self.element,
            kind.event_type(),
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<web_sys::DragEvent>() else {
                    log::warn!("{kind} listener received a non-drag event");
                    return;
                };
                handler(&WebDragEvent { event } as &dyn DragEvent);
            },
        );
        listener.forget();
        Ok(())
    }
}

struct WebDragEvent<'a> {
    event: &'a web_sys::DragEvent,
}

impl DragEvent for WebDragEvent<'_> {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn files(&self) -> Vec<DroppedFile> {
        let Some(list) = self.event.data_transfer().and_then(|dt| dt.files()) else {
            return Vec::new();
        };

        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|file| DroppedFile::new(file.name(), file.size() as u64, file.type_()))
            .collect()
    }
}
