//! Configuration options for YINI serialization.
//!
//! This module provides types to customize YINI output:
//!
//! - [`WriteOptions`]: Main configuration struct
//! - [`Quote`]: Choice of quote character for string values (single or double)
//!
//! ## Examples
//!
//! ```rust
//! use yini::{Document, Quote, WriteOptions, to_string_with_options};
//!
//! let mut doc = Document::new();
//! doc.set("name", "demo");
//!
//! let options = WriteOptions::new().with_quote(Quote::Double);
//! let text = to_string_with_options(&doc, &options);
//! assert_eq!(text, "name = \"demo\"\n");
//! ```

/// Quote character used when rendering string values.
///
/// The parser accepts both; the writer defaults to single quotes, matching
/// the format's canonical output.
///
/// # Examples
///
/// ```rust
/// use yini::Quote;
///
/// assert_eq!(Quote::Single.as_char(), '\'');
/// assert_eq!(Quote::Double.as_char(), '"');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Single,
    Double,
}

impl Quote {
    /// Returns the quote character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Configuration options for YINI serialization.
///
/// The defaults (4-space indent steps, single-quoted strings) reproduce the
/// format's canonical output.
///
/// # Examples
///
/// ```rust
/// use yini::{Quote, WriteOptions};
///
/// let options = WriteOptions::new()
///     .with_indent(2)
///     .with_quote(Quote::Double);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug)]
pub struct WriteOptions {
    pub indent: usize,
    pub quote: Quote,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: 4,
            quote: Quote::default(),
        }
    }
}

impl WriteOptions {
    /// Creates default options (4-space indent, single quotes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the quote character for string values.
    #[must_use]
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }
}
