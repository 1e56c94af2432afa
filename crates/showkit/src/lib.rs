//! # Showkit - Composable Value Rendering
//!
//! `showkit` converts in-memory values — scalars, pairs, containers, and
//! two-variant sum types — into human-readable text, with fine-grained
//! control over numeric precision, sign placement, padding, and multi-line
//! layout of large collections.
//!
//! It targets debugging, logging, and REPL-style inspection, where a
//! uniform, composable `show`-style rendering beats ad-hoc `format!` calls
//! scattered through call sites. Output is for humans: nothing here is
//! meant to be parsed back.
//!
//! ## Core Concepts
//!
//! - [`Show`]: the rendering trait; [`show`] is its free-function form
//! - Container framing: [`render_default`], [`render_bracketed`],
//!   [`render_framed`], [`render_framed_wrapped`]
//! - Variant tagging: [`render_optional`], [`render_outcome`]
//! - Formatting values: [`FloatFormat`] and [`PadFormat`] — reusable
//!   configuration structs with an `apply` method
//! - Padding: [`pad_left`], [`pad_right`], measured in display columns via
//!   [`display_width`]
//!
//! ## Quick Start
//!
//! ```rust
//! use showkit::{render_default, render_optional, show, FloatFormat, PadFormat};
//!
//! assert_eq!(show(&(1, "one")), "(1, one)");
//! assert_eq!(render_default(&[1, 2, 3, 4, 5]), "[1, 2, 3, 4, 5]");
//! assert_eq!(render_optional(&Some(42)), "Just 42");
//!
//! let price = FloatFormat::fixed(2, 2);
//! assert_eq!(price.apply(7.5), "07.50");
//!
//! let column = PadFormat::left(' ', 8);
//! assert_eq!(column.apply(&"total"), "   total");
//! ```
//!
//! ## Multi-Line Container Layout
//!
//! Large collections can be broken into rows of N elements, with
//! continuation rows indented to align under the first element:
//!
//! ```rust
//! use showkit::render_framed_wrapped;
//!
//! let out = render_framed_wrapped(", ", "scores: [", "]", &[80, 95, 70, 61], 2);
//! assert_eq!(out, "scores: [80, 95, \n         70, 61]");
//! ```
//!
//! ## Extending to Your Own Types
//!
//! Implement [`Show`] directly, or opt any `Display` type in with
//! [`show_via_display!`].

// Internal modules
mod container;
mod float;
mod json;
mod pad;
pub mod prelude;
mod show;
mod util;
mod variant;

// The trait and entry point
pub use show::{show, Show};

// Container rendering
pub use container::{render_bracketed, render_default, render_framed, render_framed_wrapped};

// Variant rendering
pub use variant::{render_optional, render_outcome};

// Formatting values
pub use float::FloatFormat;
pub use pad::{pad_left, pad_right, PadFormat};

// Width measurement
pub use util::display_width;
