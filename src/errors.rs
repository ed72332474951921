use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("No global window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Page is already initialized")]
    AlreadyInitialized,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(feature = "web")]
impl From<FrontendError> for wasm_bindgen::JsValue {
    fn from(err: FrontendError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
