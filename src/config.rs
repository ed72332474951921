//! Front-end configuration.
//!
//! [`FrontendConfig`] holds the few knobs the page helpers expose: which marker
//! attribute designates a drop zone, the diagnostic message logged on load, and the
//! log level used when the logger is initialised.
//!
//! Defaults come from [`Default`]. [`FrontendConfig::builder()`] gives a fluent,
//! validating way to customise them, and [`FrontendConfig::from_json`] accepts the
//! same fields from a host page.
//!
//! # Examples
//!
//! ```rust
//! use dataforge_frontend::FrontendConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FrontendConfig::builder()
//!     .drop_zone_attribute("data-upload-target")
//!     .load_message("uploads ready")
//!     .build()?;
//! assert_eq!(cfg.drop_zone_attribute, "data-upload-target");
//! # Ok(()) }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker attribute that flags an element as a drop zone.
pub const DEFAULT_DROP_ZONE_ATTRIBUTE: &str = "data-drop-zone";

/// Diagnostic message logged once the page structure is ready.
pub const DEFAULT_LOAD_MESSAGE: &str = "DataForge loaded 💀";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        self.to_level().to_level_filter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Elements carrying this attribute get drag-and-drop handlers.
    pub drop_zone_attribute: String,
    /// Logged when the page becomes ready, see [`FrontendConfig::load_message_level`].
    pub load_message: String,
    /// Most verbose level that reaches the log output.
    pub log_level: LogLevel,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            drop_zone_attribute: DEFAULT_DROP_ZONE_ATTRIBUTE.to_string(),
            load_message: DEFAULT_LOAD_MESSAGE.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl FrontendConfig {
    pub fn builder() -> FrontendConfigBuilder {
        FrontendConfigBuilder::default()
    }

    /// Parses a config from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FrontendConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        validate(&config)?;
        Ok(config)
    }

    /// Like [`FrontendConfig::from_json`], but an invalid config yields the defaults.
    /// The error is handed back so it can be reported once logging is up.
    pub fn from_json_or_default(json: &str) -> (Self, Option<ConfigError>) {
        match Self::from_json(json) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// `info`, or the configured level when that is stricter, so the load message
    /// is never filtered out.
    pub fn load_message_level(&self) -> log::Level {
        self.log_level.to_level().min(log::Level::Info)
    }
}

/// Builder for [`FrontendConfig`].
#[derive(Debug, Clone, Default)]
pub struct FrontendConfigBuilder {
    inner: FrontendConfig,
}

impl FrontendConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut FrontendConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn drop_zone_attribute<S: Into<String>>(self, attr: S) -> Self { self.map(|c| c.drop_zone_attribute = attr.into()) }
    pub fn load_message<S: Into<String>>(self, msg: S) -> Self { self.map(|c| c.load_message = msg.into()) }
    pub fn log_level(self, level: LogLevel) -> Self { self.map(|c| c.log_level = level) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut FrontendConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FrontendConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyAttribute,
    InvalidAttribute(String),
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyAttribute =>
                write!(f, "drop_zone_attribute must not be empty"),
            ConfigError::InvalidAttribute(attr) =>
                write!(f, "drop_zone_attribute {attr:?} may only contain ASCII alphanumerics, '-' and '_'"),
            ConfigError::Json(msg) =>
                write!(f, "cannot parse config: {msg}"),
        }
    }
}
impl std::error::Error for ConfigError {}

// The attribute ends up inside a `[...]` selector, so anything outside this set
// would change the selector's meaning.
fn validate(c: &FrontendConfig) -> Result<(), ConfigError> {
    let attr = &c.drop_zone_attribute;
    if attr.is_empty() {
        return Err(ConfigError::EmptyAttribute);
    }
    if !attr.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_') {
        return Err(ConfigError::InvalidAttribute(attr.clone()));
    }
    Ok(())
}
