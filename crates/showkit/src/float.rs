//! Fixed-precision, sign-aware floating-point formatting.
//!
//! [`FloatFormat`] is a reusable formatting value: construct it once from a
//! precision/width configuration, then [`apply`](FloatFormat::apply) it to
//! as many numbers as you like. Two constructors:
//!
//! - [`FloatFormat::fixed`] — minimum integer-part digits, zero-padded. The
//!   sign occupies one of the requested columns, and zero padding goes
//!   *between* the sign and the digits (`-03.142`, not `0-3.142`).
//! - [`FloatFormat::filled`] — minimum total width, padded with an arbitrary
//!   filler. The whole signed result is padded, so filler characters land
//!   *before* the sign (`00-3.142` for filler `'0'`). Kept as-is rather than
//!   re-ordered around the sign; pick `fixed` when zeros must hug the
//!   digits.
//!
//! ```rust
//! use showkit::FloatFormat;
//!
//! let pi = 3.14159;
//! assert_eq!(FloatFormat::fixed(0, 3).apply(pi), "3.142");
//! assert_eq!(FloatFormat::fixed(3, 3).apply(-pi), "-03.142");
//! assert_eq!(FloatFormat::filled(' ', 8, 3).apply(-pi), "  -3.142");
//! ```

use crate::pad::pad_left;

/// A reusable fixed-precision float formatter.
///
/// Precision is an exact decimal-digit count after the point (not
/// significant figures), using standard round-half-adjusting fixed
/// formatting. Padding targets count the decimal point as one character.
///
/// # Example
///
/// ```rust
/// use showkit::FloatFormat;
///
/// let pi = 3.14159;
/// assert_eq!(FloatFormat::fixed(0, 3).apply(pi), "3.142");
/// assert_eq!(FloatFormat::fixed(1, 3).apply(pi), "3.142");
/// assert_eq!(FloatFormat::fixed(2, 3).apply(pi), "03.142");
/// assert_eq!(FloatFormat::fixed(1, 7).apply(pi), "3.1415900");
/// assert_eq!(FloatFormat::fixed(4, 3).apply(-pi), "-003.142");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatFormat {
    min_left_digits: usize,
    precision: usize,
    fill: Option<(char, usize)>,
}

impl FloatFormat {
    /// A formatter with at least `min_left_digits` integer-part characters
    /// and exactly `precision` digits after the decimal point.
    ///
    /// The integer part is zero-padded to reach `min_left_digits`. For
    /// negative numbers the sign counts toward `min_left_digits` (one
    /// column goes to `-`, shrinking the digit budget by one); a
    /// `min_left_digits` of 0 on a negative still yields `-0.xxx`, never
    /// `-.xxx`.
    pub fn fixed(min_left_digits: usize, precision: usize) -> Self {
        Self {
            min_left_digits,
            precision,
            fill: None,
        }
    }

    /// A formatter padding the whole signed result with `filler` to at
    /// least `min_width` columns, with exactly `precision` digits after the
    /// decimal point.
    ///
    /// # Example
    ///
    /// ```rust
    /// use showkit::FloatFormat;
    ///
    /// let pi = 3.14159;
    /// assert_eq!(FloatFormat::filled(' ', 8, 3).apply(pi), "   3.142");
    /// assert_eq!(FloatFormat::filled(' ', 8, 6).apply(pi), "3.141590");
    /// assert_eq!(FloatFormat::filled(' ', 2, 3).apply(-pi), "-3.142");
    /// ```
    pub fn filled(filler: char, min_width: usize, precision: usize) -> Self {
        Self {
            min_left_digits: 0,
            precision,
            fill: Some((filler, min_width)),
        }
    }

    /// Formats a number with this configuration.
    ///
    /// Accepts `f32` or `f64` (anything convertible to `f64`).
    pub fn apply<T: Into<f64>>(&self, x: T) -> String {
        let x: f64 = x.into();
        let is_negative = x < 0.0;
        // The sign character occupies one column of the integer-part budget.
        let min_left = if is_negative && self.min_left_digits > 0 {
            self.min_left_digits - 1
        } else {
            self.min_left_digits
        };
        let magnitude = format!("{:.*}", self.precision, x.abs());
        let min_total = min_left + 1 + self.precision;
        let mut result = pad_left('0', min_total, &magnitude);
        if is_negative {
            result.insert(0, '-');
        }
        match self.fill {
            Some((filler, min_width)) => pad_left(filler, min_width, &result),
            None => result,
        }
    }
}
