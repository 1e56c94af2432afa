//! The [`Show`] trait: type-directed resolution of "how to render this value".
//!
//! `Show` is the entry point of the crate. Resolution is static trait
//! dispatch, most specific first:
//!
//! 1. Raw text (`&str`, `String`) is returned unchanged — no quoting, no
//!    escaping.
//! 2. Pairs render as `(first, second)`, recursing into each side.
//! 3. Scalars (integers, floats, `bool`, `char`) fall back to their
//!    `Display` output.
//!
//! Containers and variants are *not* auto-detected here; route them through
//! [`crate::container`] and [`crate::variant`] explicitly.
//!
//! Any type with a `Display` impl can opt in with one line via the
//! [`show_via_display!`](crate::show_via_display) macro.

/// A value with a textual rendering strategy.
///
/// Rendering is pure: it never mutates the value, performs no I/O, and has
/// no failure path — anything that type-checks renders.
///
/// # Example
///
/// ```rust
/// use showkit::show;
///
/// assert_eq!(show(&42), "42");
/// assert_eq!(show("foo"), "foo");
/// assert_eq!(show(&(1, "one")), "(1, one)");
/// ```
pub trait Show {
    /// Renders this value as human-readable text.
    fn show(&self) -> String;
}

/// Renders a value via its [`Show`] impl.
///
/// Free-function form of [`Show::show`], convenient at call sites that would
/// otherwise need a turbofish or an import of the trait.
pub fn show<T: Show + ?Sized>(value: &T) -> String {
    value.show()
}

/// Implements [`Show`] for types in terms of their `Display` impl.
///
/// This is how scalars participate, and the opt-in for caller-defined
/// types:
///
/// ```rust
/// use showkit::{show, show_via_display};
///
/// struct Ticket(u32);
///
/// impl std::fmt::Display for Ticket {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "TK-{:04}", self.0)
///     }
/// }
///
/// show_via_display!(Ticket);
///
/// assert_eq!(show(&Ticket(7)), "TK-0007");
/// ```
#[macro_export]
macro_rules! show_via_display {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

show_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

// String identity: show("foo") == "foo".
impl Show for str {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl<T: Show + ?Sized> Show for &T {
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<X: Show, Y: Show> Show for (X, Y) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}
