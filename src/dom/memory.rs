//! In-memory document.
//!
//! A minimal stand-in for a browser document: a flat list of elements with
//! attributes and registered drag listeners. Events are dispatched synchronously
//! with [`MemoryDocument::dispatch`] or [`MemoryElement::dispatch`], which return
//! whether a handler suppressed the default action.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt::Display;
use std::rc::Rc;

use uuid::Uuid;

use crate::dom::{Document, DragEvent, DragEventKind, DragHandler, DroppedFile, DropTarget};
use crate::errors::FrontendError;

/// A unique identifier for an element, represented as a UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct ElementInner {
    id: ElementId,
    tag: String,
    attributes: RefCell<HashMap<String, String>>,
    listeners: RefCell<Vec<(DragEventKind, Rc<dyn Fn(&dyn DragEvent)>)>>,
}

/// Shared handle to an element of a [`MemoryDocument`]. Clones point at the same element.
#[derive(Clone)]
pub struct MemoryElement {
    inner: Rc<ElementInner>,
}

impl MemoryElement {
    fn new(tag: &str) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                id: ElementId::new(),
                tag: tag.to_string(),
                attributes: RefCell::new(HashMap::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> ElementId {
        self.inner.id
    }

    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.inner.attributes.borrow_mut().insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&self, name: &str) {
        self.inner.attributes.borrow_mut().remove(name);
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.inner.attributes.borrow().contains_key(name)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.attributes.borrow().get(name).cloned()
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: DragEventKind) -> usize {
        self.inner.listeners.borrow().iter().filter(|(k, _)| *k == kind).count()
    }

    /// Runs every listener registered for the event's kind, in registration order.
    /// Returns `true` if any of them suppressed the default action.
    pub fn dispatch(&self, event: &SyntheticDragEvent) -> bool {
        // Snapshot so handlers may register further listeners without a borrow conflict.
        let handlers: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == event.kind)
            .map(|(_, h)| h.clone())
            .collect();

        for handler in handlers {
            handler(event as &dyn DragEvent);
        }
        event.is_default_prevented()
    }
}

impl DropTarget for MemoryElement {
    fn add_drag_listener(&self, kind: DragEventKind, handler: DragHandler) -> Result<(), FrontendError> {
        self.inner.listeners.borrow_mut().push((kind, Rc::from(handler)));
        Ok(())
    }
}

/// A document made of a flat, ordered list of elements.
#[derive(Default)]
pub struct MemoryDocument {
    elements: RefCell<Vec<MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element and appends it to the document.
    pub fn create_element(&self, tag: &str) -> MemoryElement {
        let element = MemoryElement::new(tag);
        self.elements.borrow_mut().push(element.clone());
        element
    }

    pub fn element(&self, id: ElementId) -> Option<MemoryElement> {
        self.elements.borrow().iter().find(|e| e.id() == id).cloned()
    }

    pub fn elements(&self) -> Vec<MemoryElement> {
        self.elements.borrow().clone()
    }

    /// Total listeners registered for `kind` across the document.
    pub fn listener_count(&self, kind: DragEventKind) -> usize {
        self.elements.borrow().iter().map(|e| e.listener_count(kind)).sum()
    }

    /// Dispatches `event` on the element with `id`. Returns `None` for an unknown element.
    pub fn dispatch(&self, id: ElementId, event: &SyntheticDragEvent) -> Option<bool> {
        let element = self.element(id)?;
        Some(element.dispatch(event))
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query_marked(&self, attribute: &str) -> Result<Vec<MemoryElement>, FrontendError> {
        Ok(self
            .elements
            .borrow()
            .iter()
            .filter(|e| e.has_attribute(attribute))
            .cloned()
            .collect())
    }
}

/// A drag event built by hand, recording whether its default action was suppressed.
#[derive(Debug)]
pub struct SyntheticDragEvent {
    kind: DragEventKind,
    files: Vec<DroppedFile>,
    default_prevented: Cell<bool>,
    files_read: Cell<usize>,
}

impl SyntheticDragEvent {
    pub fn new(kind: DragEventKind, files: Vec<DroppedFile>) -> Self {
        Self {
            kind,
            files,
            default_prevented: Cell::new(false),
            files_read: Cell::new(0),
        }
    }

    pub fn drag_over() -> Self {
        Self::new(DragEventKind::DragOver, Vec::new())
    }

    pub fn drop(files: Vec<DroppedFile>) -> Self {
        Self::new(DragEventKind::Drop, files)
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// How many times a handler asked for the file list.
    pub fn files_read(&self) -> usize {
        self.files_read.get()
    }
}

impl DragEvent for SyntheticDragEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn files(&self) -> Vec<DroppedFile> {
        self.files_read.set(self.files_read.get() + 1);
        self.files.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_marked_filters_by_attribute_in_order() {
        let doc = MemoryDocument::new();
        let a = doc.create_element("div");
        let _plain = doc.create_element("p");
        let b = doc.create_element("section");
        a.set_attribute("data-drop-zone", "");
        b.set_attribute("data-drop-zone", "avatar");

        let found = doc.query_marked("data-drop-zone").unwrap();
        let ids: Vec<_> = found.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![a.id(), b.id()]);
        assert!(doc.query_marked("data-other").unwrap().is_empty());
    }

    #[test]
    fn removed_attribute_is_no_longer_marked() {
        let doc = MemoryDocument::new();
        let a = doc.create_element("div");
        a.set_attribute("data-drop-zone", "");
        a.remove_attribute("data-drop-zone");
        assert!(doc.query_marked("data-drop-zone").unwrap().is_empty());
        assert_eq!(a.attribute("data-drop-zone"), None);
    }

    #[test]
    fn dispatch_runs_only_matching_listeners() {
        let doc = MemoryDocument::new();
        let el = doc.create_element("div");
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        el.add_drag_listener(DragEventKind::Drop, Box::new(move |_: &dyn DragEvent| h.set(h.get() + 1)))
            .unwrap();

        assert!(!el.dispatch(&SyntheticDragEvent::drag_over()));
        assert_eq!(hits.get(), 0);

        el.dispatch(&SyntheticDragEvent::drop(Vec::new()));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listeners_are_not_deduplicated() {
        let doc = MemoryDocument::new();
        let el = doc.create_element("div");
        for _ in 0..2 {
            el.add_drag_listener(DragEventKind::DragOver, Box::new(|e: &dyn DragEvent| e.prevent_default()))
                .unwrap();
        }
        assert_eq!(el.listener_count(DragEventKind::DragOver), 2);
        assert_eq!(doc.listener_count(DragEventKind::DragOver), 2);
        assert_eq!(doc.listener_count(DragEventKind::Drop), 0);
    }

    #[test]
    fn dispatch_to_unknown_element_is_none() {
        let doc = MemoryDocument::new();
        assert_eq!(doc.dispatch(ElementId::new(), &SyntheticDragEvent::drag_over()), None);
    }

    #[test]
    fn synthetic_event_tracks_prevent_default_and_file_reads() {
        let ev = SyntheticDragEvent::drop(vec![DroppedFile::new("a.txt", 3, "text/plain")]);
        assert!(!ev.is_default_prevented());
        ev.prevent_default();
        assert!(ev.is_default_prevented());

        assert_eq!(ev.files_read(), 0);
        assert_eq!(ev.files().len(), 1);
        assert_eq!(ev.files_read(), 1);
    }
}
