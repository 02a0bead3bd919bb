//! Error types for YINI parsing, serialization, and value access.
//!
//! ## Error Categories
//!
//! - **Parse errors**: Malformed YINI input, reported with the 1-based line number
//! - **Conversion errors**: A [`Value`](crate::Value) accessed as an incompatible type
//! - **Lookup errors**: A missing key or section on the document tree
//! - **I/O errors**: Reader/writer failures at the file boundary
//!
//! Parsing aborts on the first error; there is no recovery and no partial
//! document is returned.
//!
//! ## Examples
//!
//! ```rust
//! use yini::{from_str, Error};
//!
//! let result = from_str("this line has no equals sign");
//! match result {
//!     Err(Error::Parse { line, .. }) => assert_eq!(line, 1),
//!     other => panic!("expected a parse error, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
///
/// Parse errors carry the 1-based line number of the offending input line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed input; parsing stops at the first occurrence
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    /// A value could not be coerced to the requested type
    #[error("cannot convert {found} to {expected}")]
    Conversion {
        expected: &'static str,
        found: &'static str,
    },

    /// Key lookup on a section that does not hold it
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Section lookup on a parent that does not hold it
    #[error("section not found: {0}")]
    SectionNotFound(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error carrying the 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Error;
    ///
    /// let err = Error::parse(3, "empty key");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            line,
            msg: msg.into(),
        }
    }

    /// Creates a conversion error naming the requested and actual types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Error;
    ///
    /// let err = Error::conversion("int", "array");
    /// assert!(err.to_string().contains("cannot convert array to int"));
    /// ```
    pub fn conversion(expected: &'static str, found: &'static str) -> Self {
        Error::Conversion { expected, found }
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
