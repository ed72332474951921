// src/cookies.rs
//! Cookies: the [`read_cookie`] parser and the [`CookieSource`] it reads from.
//!
//! Parsing is kept apart from the ambient `document.cookie` store. [`read_cookie`]
//! is a pure function over a cookie string, while a [`CookieSource`] performs the
//! one ambient read at the call site.

mod reader;
mod source;
#[cfg(feature = "web")]
mod web;

pub use reader::read_cookie;
pub use source::{get_cookie, CookieSource, StaticCookieSource};
#[cfg(feature = "web")]
pub use web::WebCookieSource;
