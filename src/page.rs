//! Page bootstrap.
//!
//! A [`Page`] owns the document and configuration of one page load and turns the
//! "document structure ready" signal into a single call of
//! [`drop_zone::initialize_with_sink`]. The host's startup sequence calls
//! [`Page::on_ready`] itself, or with the `web` feature uses
//! `Page::attach_to_window` to wait for `DOMContentLoaded`.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::FrontendConfig;
use crate::dom::Document;
use crate::drop_zone::{self, DropSink, IgnoreDrop};
use crate::errors::FrontendError;

pub struct Page<D: Document> {
    document: D,
    config: FrontendConfig,
    sink: Rc<dyn DropSink>,
    ready: Cell<bool>,
}

impl<D: Document> Page<D> {
    pub fn new(document: D, config: FrontendConfig) -> Self {
        Self {
            document,
            config,
            sink: Rc::new(IgnoreDrop),
            ready: Cell::new(false),
        }
    }

    /// Replaces the default [`IgnoreDrop`] sink.
    pub fn with_sink(mut self, sink: Rc<dyn DropSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Handles the structure-ready signal: logs the load message and wires the drop
    /// zones. Returns the number of zones wired.
    ///
    /// Only the first call does anything. Later calls return
    /// [`FrontendError::AlreadyInitialized`] and register no listeners.
    pub fn on_ready(&self) -> Result<usize, FrontendError> {
        if self.ready.replace(true) {
            log::warn!("ready signal received twice; drop zones are already wired");
            return Err(FrontendError::AlreadyInitialized);
        }

        log::log!(self.config.load_message_level(), "{}", self.config.load_message);
        drop_zone::initialize_with_sink(&self.document, &self.config, self.sink.clone())
    }
}

#[cfg(feature = "web")]
impl Page<crate::dom::web::WebDocument> {
    /// Runs [`Page::on_ready`] once the page structure is parsed. If parsing already
    /// finished, it runs immediately. Otherwise it runs on `DOMContentLoaded`.
    pub fn attach_to_window(self) -> Result<(), FrontendError> {
        use gloo::events::EventListener;

        if self.document.is_structure_ready() {
            return self.on_ready().map(|_| ());
        }

        let target = self.document.raw().clone();
        let page = Rc::new(self);
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            if let Err(e) = page.on_ready() {
                log::error!("cannot initialize page: {e}");
            }
        })
        .forget();
        Ok(())
    }
}
