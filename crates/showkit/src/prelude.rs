//! Showkit prelude for convenient imports.
//!
//! Re-exports the trait, rendering functions, and formatter types in one
//! line:
//!
//! ```rust
//! use showkit::prelude::*;
//!
//! assert_eq!(show(&(1, "one")), "(1, one)");
//! assert_eq!(render_default(&[1, 2, 3]), "[1, 2, 3]");
//! assert_eq!(FloatFormat::fixed(2, 1).apply(3.26), "03.3");
//! ```

// The trait and entry point
pub use crate::show::{show, Show};

// Container and variant rendering
pub use crate::container::{
    render_bracketed, render_default, render_framed, render_framed_wrapped,
};
pub use crate::variant::{render_optional, render_outcome};

// Formatting values and padding
pub use crate::float::FloatFormat;
pub use crate::pad::{pad_left, pad_right, PadFormat};

// Width measurement
pub use crate::util::display_width;
