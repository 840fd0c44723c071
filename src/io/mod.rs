//! Plain-text matrix format.
//!
//! One line per row, entries separated by a configurable separator. See
//! [`format::TextFormat`] for the separator rules.

pub mod file;
pub mod format;
pub mod text;

pub use format::{validate_separator, TextFormat, DEFAULT_SEPARATOR};
