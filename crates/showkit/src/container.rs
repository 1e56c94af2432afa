//! Framed rendering of ordered sequences.
//!
//! A container renders as its elements (each via [`Show`]) joined with a
//! separator and wrapped in a prefix/suffix frame. The wrapped variant
//! additionally breaks the line every N elements, indenting continuation
//! rows by the prefix's display width so they align under the first
//! element.
//!
//! Elements are accepted as any `IntoIterator` whose items implement
//! [`Show`] — slices, vecs, iterator chains, and map iterators (whose items
//! are key/value pairs) all work:
//!
//! ```rust
//! use showkit::{render_default, render_framed};
//!
//! assert_eq!(render_default(&[1, 2, 3]), "[1, 2, 3]");
//! assert_eq!(render_framed(" => ", "{", "}", &[1, 2, 3]), "{1 => 2 => 3}");
//! ```

use crate::show::Show;
use crate::util::display_width;

/// Renders elements joined by `separator` inside a `prefix`/`suffix` frame,
/// breaking the line every `wrap_every` elements.
///
/// A `wrap_every` of 0 disables wrapping entirely. Otherwise, every element
/// whose zero-based index is a nonzero multiple of `wrap_every` is moved to
/// a new line, indented by as many spaces as the prefix is wide. The
/// separator is emitted before the break, so rows end with the separator:
///
/// ```rust
/// use showkit::render_framed_wrapped;
///
/// assert_eq!(
///     render_framed_wrapped(",", "(", ")", &[1, 2, 3, 4, 5], 2),
///     "(1,2,\n 3,4,\n 5)"
/// );
/// ```
///
/// An empty sequence renders as `prefix + suffix`. A `wrap_every` of 1
/// breaks before every element except the first.
pub fn render_framed_wrapped<I>(
    separator: &str,
    prefix: &str,
    suffix: &str,
    elements: I,
    wrap_every: usize,
) -> String
where
    I: IntoIterator,
    I::Item: Show,
{
    let rendered: Vec<String> = if wrap_every == 0 {
        elements.into_iter().map(|x| x.show()).collect()
    } else {
        let newline = format!("\n{}", " ".repeat(display_width(prefix)));
        elements
            .into_iter()
            .enumerate()
            .map(|(i, x)| {
                if i != 0 && i % wrap_every == 0 {
                    format!("{}{}", newline, x.show())
                } else {
                    x.show()
                }
            })
            .collect()
    };
    format!("{}{}{}", prefix, rendered.join(separator), suffix)
}

/// Renders elements joined by `separator` inside a `prefix`/`suffix` frame.
///
/// ```rust
/// use showkit::render_framed;
///
/// assert_eq!(render_framed(" => ", "{", "}", &[1, 2, 3]), "{1 => 2 => 3}");
/// ```
pub fn render_framed<I>(separator: &str, prefix: &str, suffix: &str, elements: I) -> String
where
    I: IntoIterator,
    I::Item: Show,
{
    render_framed_wrapped(separator, prefix, suffix, elements, 0)
}

/// Renders elements joined by `separator` inside square brackets.
///
/// ```rust
/// use showkit::render_bracketed;
///
/// assert_eq!(render_bracketed(" - ", &[1, 2, 3]), "[1 - 2 - 3]");
/// ```
pub fn render_bracketed<I>(separator: &str, elements: I) -> String
where
    I: IntoIterator,
    I::Item: Show,
{
    render_framed(separator, "[", "]", elements)
}

/// Renders elements as a `", "`-joined, bracketed list.
///
/// ```rust
/// use showkit::render_default;
///
/// assert_eq!(render_default(&[1, 2, 3]), "[1, 2, 3]");
/// ```
pub fn render_default<I>(elements: I) -> String
where
    I: IntoIterator,
    I::Item: Show,
{
    render_bracketed(", ", elements)
}
