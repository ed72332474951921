//! Reading a single value out of a `document.cookie` string.
//!
//! The string is a sequence of `name=value` pairs joined by `"; "`. This is **not**
//! a tokenizing parser. The lookup is a literal split on `"; name="`, which gives
//! these results:
//!
//! - A name that only occurs inside another cookie's name (`user` vs `superuser`)
//!   matches only where the `"; name="` boundary genuinely lines up.
//! - A name that splits the string into more than two segments (for instance a
//!   duplicated cookie) yields `None` rather than the first or last occurrence.
//! - Values are raw. Nothing is URL-decoded or unquoted.

/// Returns the value of cookie `name` in `cookie_string`, or `None` when there is
/// no unambiguous match.
///
/// ```rust
/// use dataforge_frontend::read_cookie;
///
/// assert_eq!(read_cookie("a=1; theme=dark; b=3", "theme").as_deref(), Some("dark"));
/// assert_eq!(read_cookie("theme=dark; theme=light", "theme"), None);
/// assert_eq!(read_cookie("", "theme"), None);
/// ```
pub fn read_cookie(cookie_string: &str, name: &str) -> Option<String> {
    // Prefixing makes the first pair look like every other one.
    let haystack = format!("; {cookie_string}");
    let needle = format!("; {name}=");

    let mut parts = haystack.split(needle.as_str());
    let _before = parts.next()?;
    let after = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    after.split(';').next().map(str::to_string)
}
