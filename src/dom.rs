//! DOM seam used by the drop-zone initializer.
//!
//! The initializer only needs three capabilities from a host document:
//!
//! - [`Document`]: find every element carrying a marker attribute.
//! - [`DropTarget`]: register a handler for one of the [`DragEventKind`]s.
//! - [`DragEvent`]: suppress the default action and list the dropped files.
//!
//! [`memory`] implements them in plain Rust for tests and native hosts. With the
//! `web` feature, [`web`] implements them on top of `web-sys` and `gloo`.
//!
//! Everything here is single-threaded, like the browser event loop it models.
//! Handlers are boxed closures without `Send`/`Sync` bounds.

pub mod memory;
#[cfg(feature = "web")]
pub mod web;

use crate::errors::FrontendError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The drag-and-drop events a drop zone listens to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// Fired continuously while something is dragged over the element.
    DragOver,
    /// Fired once when the dragged payload is released over the element.
    Drop,
}

impl DragEventKind {
    /// The DOM event type string.
    pub fn event_type(self) -> &'static str {
        match self {
            DragEventKind::DragOver => "dragover",
            DragEventKind::Drop => "drop",
        }
    }
}

impl Display for DragEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.event_type())
    }
}

/// One entry of a drop event's file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedFile {
    /// File name without any path.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type as reported by the platform; empty when unknown.
    pub mime_type: String,
}

impl DroppedFile {
    pub fn new<N: Into<String>, M: Into<String>>(name: N, size: u64, mime_type: M) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// A drag event as seen by a drop-zone handler.
pub trait DragEvent {
    /// Tells the platform not to perform its built-in response to the event.
    fn prevent_default(&self);

    /// Files carried by the event's data transfer. Empty, never absent, when the
    /// payload holds no files.
    fn files(&self) -> Vec<DroppedFile>;
}

/// Handler registered for a [`DragEventKind`].
pub type DragHandler = Box<dyn Fn(&dyn DragEvent)>;

/// An element that accepts drag event listeners.
pub trait DropTarget {
    /// Registers `handler` for `kind`. Listeners are never deduplicated.
    fn add_drag_listener(&self, kind: DragEventKind, handler: DragHandler) -> Result<(), FrontendError>;
}

/// A host document that can be searched for marked elements.
pub trait Document {
    type Element: DropTarget;

    /// Returns every element carrying `attribute`, in document order.
    fn query_marked(&self, attribute: &str) -> Result<Vec<Self::Element>, FrontendError>;
}

/// CSS selector matching elements that carry `attribute`, whatever its value.
pub fn marker_selector(attribute: &str) -> String {
    format!("[{attribute}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_strings() {
        assert_eq!(DragEventKind::DragOver.event_type(), "dragover");
        assert_eq!(DragEventKind::Drop.event_type(), "drop");
        assert_eq!(DragEventKind::Drop.to_string(), "drop");
    }

    #[test]
    fn marker_selector_wraps_attribute() {
        assert_eq!(marker_selector("data-drop-zone"), "[data-drop-zone]");
    }

    #[test]
    fn dropped_file_serializes() {
        let file = DroppedFile::new("report.csv", 42, "text/csv");
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("\"name\":\"report.csv\""));
        assert!(json.contains("\"mime_type\":\"text/csv\""));
    }
}
