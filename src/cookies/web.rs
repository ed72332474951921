use crate::cookies::CookieSource;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// `document.cookie` of a live browser document.
pub struct WebCookieSource {
    document: HtmlDocument,
}

impl WebCookieSource {
    pub fn new(document: HtmlDocument) -> Self {
        Self { document }
    }

    /// Uses the global window's document. `None` outside an HTML document.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let document = document.dyn_into::<HtmlDocument>().ok()?;
        Some(Self::new(document))
    }
}

impl CookieSource for WebCookieSource {
    fn cookie_string(&self) -> Option<String> {
        // Sandboxed documents throw a SecurityError here.
        self.document.cookie().ok()
    }
}
