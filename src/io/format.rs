// src/io/format.rs
// Separator configuration for the plain-text matrix format.

use crate::error::{MatrixError, Result};

/// Separator written between entries when none is configured.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Configuration for rendering and tokenizing matrix text.
///
/// Without a separator, rows are written with a single space between entries
/// and read back by splitting on commas and whitespace. A configured
/// separator is used verbatim in both directions; it is validated on
/// construction so that no rendered number can be confused with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFormat {
    separator: Option<String>,
}

impl TextFormat {
    /// Uses `separator` for both writing and reading.
    pub fn with_separator(separator: &str) -> Result<Self> {
        validate_separator(separator)?;
        Ok(Self {
            separator: Some(separator.to_owned()),
        })
    }

    /// `None` selects the default format.
    pub fn from_option(separator: Option<&str>) -> Result<Self> {
        match separator {
            Some(sep) => Self::with_separator(sep),
            None => Ok(Self::default()),
        }
    }

    /// The separator placed between entries when writing.
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Split one line of text into entry tokens.
    ///
    /// A whitespace-only separator splits on runs of whitespace. Any other
    /// separator splits exactly and trims each token, so `" | "` and `"|"`
    /// read the same text. The default splits on commas and whitespace and
    /// drops empty pieces.
    pub fn split_line<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.separator.as_deref() {
            None => line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .collect(),
            Some(sep) if sep.trim().is_empty() => line.split_whitespace().collect(),
            Some(sep) => line.split(sep).map(str::trim).collect(),
        }
    }
}

/// Reject separators that could not be told apart from the numbers they sit
/// between.
///
/// Entries are rendered like `-1.5`, `2.0`, `1e-7`, `inf` or `NaN`, so a
/// separator may not contain digits, `.`, `+`, `-` or letters. Line breaks
/// are reserved for ending rows.
pub fn validate_separator(separator: &str) -> Result<()> {
    let reject = |reason: &'static str| MatrixError::Format {
        separator: separator.to_owned(),
        reason,
    };

    if separator.is_empty() {
        return Err(reject("separator is empty"));
    }
    for c in separator.chars() {
        if c == '\n' || c == '\r' {
            return Err(reject("contains a line break"));
        }
        if c.is_ascii_digit() {
            return Err(reject("contains a digit"));
        }
        if c == '.' {
            return Err(reject("contains a decimal point"));
        }
        if c == '+' || c == '-' {
            return Err(reject("contains a sign"));
        }
        if c.is_alphabetic() {
            return Err(reject("contains a letter"));
        }
    }
    Ok(())
}
