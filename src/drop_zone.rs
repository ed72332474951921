//! Drop-zone wiring.
//!
//! [`initialize`] finds every element carrying the configured marker attribute and
//! attaches two handlers to it:
//!
//! - `dragover`: suppresses the default action, otherwise the browser refuses the drop.
//! - `drop`: suppresses the default action (navigating to the dropped file), reads the
//!   file list and hands it to a [`DropSink`].
//!
//! Handling stops there. There is no validation, upload or UI feedback. The default
//! sink, [`IgnoreDrop`], discards the files, so a drop has no effect beyond the
//! suppressed default action. Hosts that want to act on drops pass their own sink to
//! [`initialize_with_sink`].
//!
//! Nothing is deduplicated. Initializing the same document twice registers every
//! handler twice. [`Page`](crate::Page) guards against that.

use std::rc::Rc;

use crate::config::FrontendConfig;
use crate::dom::{Document, DragEvent, DragEventKind, DroppedFile, DropTarget};
use crate::errors::FrontendError;

/// Receives the files of every drop on a drop zone.
pub trait DropSink {
    fn files_dropped(&self, files: Vec<DroppedFile>);
}

/// Discards dropped files.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreDrop;

impl DropSink for IgnoreDrop {
    fn files_dropped(&self, _files: Vec<DroppedFile>) {}
}

/// `dragover` behavior: make the element a valid drop target.
pub fn handle_drag_over(event: &dyn DragEvent) {
    event.prevent_default();
}

/// `drop` behavior: keep the browser from navigating away, then pass the files on.
pub fn handle_drop(event: &dyn DragEvent, sink: &dyn DropSink) {
    event.prevent_default();
    let files = event.files();
    log::debug!("{} file(s) dropped on drop zone", files.len());
    sink.files_dropped(files);
}

/// Attaches the drop-zone handlers with the no-op [`IgnoreDrop`] sink.
/// Returns the number of zones wired, which is zero when nothing is marked.
pub fn initialize<D: Document>(document: &D, config: &FrontendConfig) -> Result<usize, FrontendError> {
    initialize_with_sink(document, config, Rc::new(IgnoreDrop))
}

/// Like [`initialize`], handing dropped files to `sink`.
pub fn initialize_with_sink<D: Document>(
    document: &D,
    config: &FrontendConfig,
    sink: Rc<dyn DropSink>,
) -> Result<usize, FrontendError> {
    let zones = document.query_marked(&config.drop_zone_attribute)?;

    for zone in &zones {
        zone.add_drag_listener(
            DragEventKind::DragOver,
            Box::new(|event: &dyn DragEvent| handle_drag_over(event)),
        )?;

        let sink = sink.clone();
        zone.add_drag_listener(
            DragEventKind::Drop,
            Box::new(move |event: &dyn DragEvent| handle_drop(event, sink.as_ref())),
        )?;
    }

    log::debug!(
        "attached drop handlers to {} element(s) marked [{}]",
        zones.len(),
        config.drop_zone_attribute
    );
    Ok(zones.len())
}
