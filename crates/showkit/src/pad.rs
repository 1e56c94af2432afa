//! Padding to a minimum width with an arbitrary filler character.
//!
//! Unlike `format!("{:>w$}")`, the filler is caller-chosen, and widths are
//! measured in display columns (see [`display_width`]), so ANSI-styled text
//! pads correctly.
//!
//! The free functions pad existing text; [`PadFormat`] is a reusable
//! formatting value that pads the default rendering of any [`Show`] value,
//! for column-aligned tabular output of heterogeneous values.

use crate::show::Show;
use crate::util::display_width;

/// Pads `text` on the left with `filler` up to `min_length` columns.
///
/// Text already at or above `min_length` is returned unchanged — there is
/// no truncation.
///
/// # Example
///
/// ```rust
/// use showkit::pad_left;
///
/// assert_eq!(pad_left(' ', 4, "3"), "   3");
/// assert_eq!(pad_left('0', 8, "-3.142"), "00-3.142");
/// assert_eq!(pad_left(' ', 4, "12345"), "12345");
/// ```
pub fn pad_left(filler: char, min_length: usize, text: &str) -> String {
    let deficit = min_length.saturating_sub(display_width(text));
    let mut result = String::with_capacity(text.len() + deficit);
    for _ in 0..deficit {
        result.push(filler);
    }
    result.push_str(text);
    result
}

/// Pads `text` on the right with `filler` up to `min_length` columns.
///
/// # Example
///
/// ```rust
/// use showkit::pad_right;
///
/// assert_eq!(pad_right(' ', 4, "3"), "3   ");
/// assert_eq!(pad_right('.', 6, "ab"), "ab....");
/// ```
pub fn pad_right(filler: char, min_length: usize, text: &str) -> String {
    let deficit = min_length.saturating_sub(display_width(text));
    let mut result = String::with_capacity(text.len() + deficit);
    result.push_str(text);
    for _ in 0..deficit {
        result.push(filler);
    }
    result
}

/// Which side of the text receives the filler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// A reusable padding formatter over the default rendering of a value.
///
/// `PadFormat` captures a filler character, a minimum width, and a side;
/// [`apply`](PadFormat::apply) renders its argument via [`Show`] and pads
/// the result. The formatter is plain `Copy` configuration — construct it
/// once, apply it to as many values as you like.
///
/// # Example
///
/// ```rust
/// use showkit::PadFormat;
///
/// let right_align = PadFormat::left(' ', 6);
/// assert_eq!(right_align.apply(&3), "     3");
/// assert_eq!(right_align.apply(&12345), " 12345");
/// assert_eq!(right_align.apply("over-long"), "over-long");
///
/// let zeroed = PadFormat::left('0', 4);
/// assert_eq!(zeroed.apply(&3), "0003");
///
/// let left_align = PadFormat::right(' ', 6);
/// assert_eq!(left_align.apply(&3), "3     ");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadFormat {
    filler: char,
    min_length: usize,
    side: Side,
}

impl PadFormat {
    /// A formatter that pads the rendered value on the left (right-aligns).
    pub fn left(filler: char, min_length: usize) -> Self {
        Self {
            filler,
            min_length,
            side: Side::Left,
        }
    }

    /// A formatter that pads the rendered value on the right (left-aligns).
    pub fn right(filler: char, min_length: usize) -> Self {
        Self {
            filler,
            min_length,
            side: Side::Right,
        }
    }

    /// Renders `value` via [`Show`] and pads it to the configured width.
    pub fn apply<T: Show + ?Sized>(&self, value: &T) -> String {
        let rendered = value.show();
        match self.side {
            Side::Left => pad_left(self.filler, self.min_length, &rendered),
            Side::Right => pad_right(self.filler, self.min_length, &rendered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left_basic() {
        assert_eq!(pad_left(' ', 4, "3"), "   3");
        assert_eq!(pad_left('0', 4, "3"), "0003");
    }

    #[test]
    fn test_pad_right_basic() {
        assert_eq!(pad_right(' ', 4, "3"), "3   ");
    }

    #[test]
    fn test_pad_long_input_unchanged() {
        assert_eq!(pad_left(' ', 4, "12345"), "12345");
        assert_eq!(pad_right(' ', 4, "12345"), "12345");
    }

    #[test]
    fn test_pad_exact_length_unchanged() {
        assert_eq!(pad_left('x', 3, "abc"), "abc");
        assert_eq!(pad_right('x', 3, "abc"), "abc");
    }

    #[test]
    fn test_pad_uses_filler_not_spaces() {
        assert_eq!(pad_left('0', 8, "-3.142"), "00-3.142");
        assert_eq!(pad_left(' ', 8, "-3.142"), "  -3.142");
    }

    #[test]
    fn test_pad_zero_min_length() {
        assert_eq!(pad_left('x', 0, "ab"), "ab");
        assert_eq!(pad_right('x', 0, ""), "");
    }

    #[test]
    fn test_pad_ignores_ansi_codes_in_width() {
        let styled = "\x1b[31m42\x1b[0m";
        let padded = pad_left(' ', 5, styled);
        assert_eq!(padded, format!("   {}", styled));
    }

    #[test]
    fn test_pad_format_left() {
        let fmt = PadFormat::left(' ', 4);
        assert_eq!(fmt.apply(&3), "   3");
        assert_eq!(fmt.apply(&12345), "12345");
    }

    #[test]
    fn test_pad_format_right() {
        let fmt = PadFormat::right(' ', 4);
        assert_eq!(fmt.apply(&3), "3   ");
    }

    #[test]
    fn test_pad_format_renders_via_show() {
        let fmt = PadFormat::right('.', 10);
        assert_eq!(fmt.apply(&(1, 2)), "(1, 2)....");
    }

    #[test]
    fn test_pad_format_is_reusable() {
        let fmt = PadFormat::left('0', 3);
        assert_eq!(fmt.apply(&1), "001");
        assert_eq!(fmt.apply(&1), "001");
        let copy = fmt;
        assert_eq!(copy.apply(&22), "022");
    }
}
