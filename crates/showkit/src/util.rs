//! Width measurement for padding and layout.
//!
//! Padding and indentation decisions are made in display columns, not bytes:
//! ANSI escape codes are preserved in output but never count toward width,
//! and CJK characters count as 2 columns.

use console::measure_text_width;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use showkit::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);  // ANSI codes ignored
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}
