//! Tagged rendering of optional and outcome values.
//!
//! Two-case sum types render as their case tag, followed by the rendered
//! payload when one exists: `Nothing` / `Just 42` and `Error fail` /
//! `Ok 42`. Both functions are pure and total — `match` covers both cases,
//! so there is no unchecked extraction path.

use crate::show::Show;

/// Renders an optional value as `"Nothing"` or `"Just "` + payload.
///
/// # Example
///
/// ```rust
/// use showkit::render_optional;
///
/// assert_eq!(render_optional(&Some(42)), "Just 42");
/// assert_eq!(render_optional::<i32>(&None), "Nothing");
/// ```
pub fn render_optional<T: Show>(value: &Option<T>) -> String {
    match value {
        None => "Nothing".to_string(),
        Some(x) => format!("Just {}", x.show()),
    }
}

/// Renders an outcome value as `"Ok "` + payload or `"Error "` + payload.
///
/// # Example
///
/// ```rust
/// use showkit::render_outcome;
///
/// assert_eq!(render_outcome::<i32, &str>(&Ok(42)), "Ok 42");
/// assert_eq!(render_outcome::<i32, &str>(&Err("fail")), "Error fail");
/// ```
pub fn render_outcome<T: Show, E: Show>(value: &Result<T, E>) -> String {
    match value {
        Err(e) => format!("Error {}", e.show()),
        Ok(x) => format!("Ok {}", x.show()),
    }
}
