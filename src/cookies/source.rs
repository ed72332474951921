use crate::cookies::read_cookie;

/// Provides the cookie string of the current document.
///
/// In the browser this is `document.cookie`. `None` means there is no cookie store
/// at all (no document, or the document refuses access). Lookups then degrade to
/// "not found".
pub trait CookieSource {
    fn cookie_string(&self) -> Option<String>;
}

/// A cookie source backed by a fixed string.
#[derive(Debug, Clone, Default)]
pub struct StaticCookieSource {
    cookies: Option<String>,
}

impl StaticCookieSource {
    pub fn new<S: Into<String>>(cookies: S) -> Self {
        Self { cookies: Some(cookies.into()) }
    }

    /// A source without any cookie store behind it.
    pub fn unavailable() -> Self {
        Self { cookies: None }
    }
}

impl CookieSource for StaticCookieSource {
    fn cookie_string(&self) -> Option<String> {
        self.cookies.clone()
    }
}

/// Reads the source once and looks up `name` with [`read_cookie`].
pub fn get_cookie(source: &dyn CookieSource, name: &str) -> Option<String> {
    let Some(cookies) = source.cookie_string() else {
        log::trace!("no cookie store available while looking up {name:?}");
        return None;
    };
    read_cookie(&cookies, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingSource {
        reads: Cell<usize>,
    }

    impl CookieSource for CountingSource {
        fn cookie_string(&self) -> Option<String> {
            self.reads.set(self.reads.get() + 1);
            Some("session=abc123; theme=dark".into())
        }
    }

    #[test]
    fn static_source_lookup() {
        let source = StaticCookieSource::new("session=abc123; theme=dark");
        assert_eq!(get_cookie(&source, "theme").as_deref(), Some("dark"));
        assert_eq!(get_cookie(&source, "session").as_deref(), Some("abc123"));
        assert_eq!(get_cookie(&source, "missing"), None);
    }

    #[test]
    fn unavailable_store_is_not_found() {
        let source = StaticCookieSource::unavailable();
        assert_eq!(get_cookie(&source, "theme"), None);
        assert_eq!(StaticCookieSource::default().cookie_string(), None);
    }

    #[test]
    fn ambient_store_is_read_once_per_lookup() {
        let source = CountingSource { reads: Cell::new(0) };
        assert_eq!(get_cookie(&source, "session").as_deref(), Some("abc123"));
        assert_eq!(source.reads.get(), 1);
    }
}
