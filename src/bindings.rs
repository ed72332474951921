//! JavaScript entry points.

use wasm_bindgen::prelude::*;

use crate::config::FrontendConfig;
use crate::cookies::{self, WebCookieSource};
use crate::dom::web::{js_error, WebDocument};
use crate::errors::FrontendError;
use crate::logging;
use crate::page::Page;

/// `<meta name="dataforge-config" content="{...}">` overrides the default config.
const CONFIG_META_SELECTOR: &str = r#"meta[name="dataforge-config"]"#;

/// Config from the meta tag, or the defaults. A broken config never stops the
/// drop zones from being wired; its error is returned for logging.
fn page_config(document: &WebDocument) -> (FrontendConfig, Option<FrontendError>) {
    let meta = match document.raw().query_selector(CONFIG_META_SELECTOR) {
        Ok(meta) => meta,
        Err(e) => return (FrontendConfig::default(), Some(js_error(e))),
    };
    match meta.and_then(|m| m.get_attribute("content")) {
        Some(json) => {
            let (config, err) = FrontendConfig::from_json_or_default(&json);
            (config, err.map(FrontendError::from))
        }
        None => (FrontendConfig::default(), None),
    }
}

// Runs when the module is instantiated, which may be before the markup is parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = WebDocument::from_window()?;
    let (config, config_error) = page_config(&document);
    logging::init(config.log_level);
    if let Some(e) = config_error {
        log::warn!("ignoring page config, using defaults: {e}");
    }

    Page::new(document, config).attach_to_window()?;
    Ok(())
}

/// Value of cookie `name` in `document.cookie`, or `undefined`.
#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: &str) -> Option<String> {
    let source = WebCookieSource::from_window()?;
    cookies::get_cookie(&source, name)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn with_meta(content: &str, check: impl FnOnce(&WebDocument)) {
        let document = WebDocument::from_window().unwrap();
        let meta = document.raw().create_element("meta").unwrap();
        meta.set_attribute("name", "dataforge-config").unwrap();
        meta.set_attribute("content", content).unwrap();
        let body = document.raw().body().unwrap();
        body.append_child(&meta).unwrap();

        check(&document);

        meta.remove();
    }

    #[wasm_bindgen_test]
    fn malformed_meta_config_falls_back_to_defaults() {
        with_meta("{not json", |document| {
            let (config, err) = page_config(document);
            assert_eq!(config, FrontendConfig::default());
            assert!(matches!(err, Some(FrontendError::Config(_))));
        });
    }

    #[wasm_bindgen_test]
    fn meta_config_is_applied() {
        with_meta(r#"{"drop_zone_attribute": "data-upload"}"#, |document| {
            let (config, err) = page_config(document);
            assert_eq!(config.drop_zone_attribute, "data-upload");
            assert!(err.is_none());
        });
    }

    #[wasm_bindgen_test]
    fn missing_cookie_is_undefined() {
        assert_eq!(get_cookie("dataforge-no-such-cookie"), None);
    }
}
