//! Front-end helpers for the DataForge web application.
//!
//! Two independent pieces live here:
//!
//! - [`drop_zone`]: wires `dragover`/`drop` handlers onto every element carrying the
//!   drop-zone marker attribute, driven once per page load by a [`Page`].
//! - [`cookies`]: reads a single named value out of a `document.cookie` string.
//!
//! The DOM is reached through the traits in [`dom`]. The `web` feature provides the
//! `web-sys` implementation and the `wasm-bindgen` exports. Without it,
//! [`dom::memory`] lets native hosts and tests drive the same code.

pub mod config;
pub mod cookies;
pub mod dom;
pub mod drop_zone;
pub mod errors;
pub mod logging;
pub mod page;

#[cfg(feature = "web")]
mod bindings;

pub use config::{FrontendConfig, LogLevel};
pub use cookies::{get_cookie, read_cookie, CookieSource};
pub use drop_zone::{initialize, DropSink, IgnoreDrop};
pub use errors::FrontendError;
pub use page::Page;
