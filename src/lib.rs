//! # yini
//!
//! A parser and serializer for the YINI hierarchical configuration format.
//!
//! ## What is YINI?
//!
//! YINI is a line-oriented configuration format with indentation-free
//! nesting: section depth is marked by a run of leading carets rather than
//! whitespace, values infer their types from the literal text, and both
//! `//` line comments and `/* ... */` block comments are supported.
//!
//! ```text
//! app_name = 'demo'
//! max_retries = 3          // inferred as an integer
//!
//! ^ server
//! host = 'localhost'
//! port = 8080
//!
//!     ^^ auth
//!     enabled = yes
//!     methods = ['token', 'basic']
//! ```
//!
//! The full format is documented in the [`spec`] module.
//!
//! ## Key Features
//!
//! - **Indentation-free nesting**: depth comes from `^` markers; leading
//!   whitespace is cosmetic
//! - **Typed values**: strings, integers, floats, booleans, and nested
//!   arrays, with coercing accessors between the scalar types
//! - **Deterministic output**: sections and keys serialize in insertion
//!   order; serialization never fails
//! - **Serde interop**: [`Value`], [`Section`], and [`Document`] implement
//!   `Serialize`/`Deserialize`, so a parsed config can be re-exported
//!   through any serde format
//!
//! ## Quick Start
//!
//! ```rust
//! use yini::from_str;
//!
//! let doc = from_str("
//! app_name = 'demo'
//! ^ server
//! host = 'localhost'
//! port = 8080
//! ").unwrap();
//!
//! assert_eq!(doc.get("app_name").unwrap().as_string().unwrap(), "demo");
//!
//! let server = doc.get_section("server").unwrap();
//! assert_eq!(server.get("port").unwrap().as_int().unwrap(), 8080);
//! ```
//!
//! ### Building and Writing Documents
//!
//! ```rust
//! use yini::{Document, to_string};
//!
//! let mut doc = Document::new();
//! doc.set("enabled", true);
//! doc.section("limits").set("max_connections", 64);
//!
//! assert_eq!(
//!     to_string(&doc),
//!     "enabled = true\n^ limits\n    max_connections = 64\n"
//! );
//! ```
//!
//! ### Dynamic Values with the yini! Macro
//!
//! ```rust
//! use yini::{yini, Document};
//!
//! let mut doc = Document::new();
//! doc.set("ports", yini!([8080, 8443]));
//! assert!(doc.get("ports").unwrap().is_array());
//! ```
//!
//! ## Error Handling
//!
//! Parsing fails fast with [`Error::Parse`] carrying the 1-based line
//! number; value coercions fail with [`Error::Conversion`]; missing lookups
//! fail with [`Error::KeyNotFound`] / [`Error::SectionNotFound`].
//! Serialization is total and never fails.
//!
//! ## Concurrency
//!
//! Parsing and serialization are pure, synchronous, in-memory
//! transformations. A [`Document`] carries no interior synchronization;
//! share one across threads behind your own lock if you must mutate it
//! concurrently.

pub mod document;
pub mod error;
pub mod macros;
pub mod options;
pub mod parse;
pub mod ser;
pub mod spec;
pub mod value;

pub use document::{Document, Section};
pub use error::{Error, Result};
pub use options::{Quote, WriteOptions};
pub use parse::{parse_value, Parser};
pub use ser::Serializer;
pub use value::Value;

use std::io;

/// Parse YINI text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use yini::from_str;
///
/// let doc = from_str("host = 'localhost'").unwrap();
/// assert!(doc.has_value("host"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] with the 1-based line number on the first
/// malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    Parser::new(s).parse()
}

/// Parse YINI text from bytes into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use yini::from_slice;
///
/// let doc = from_slice(b"port = 8080").unwrap();
/// assert_eq!(doc.get("port").unwrap().as_int().unwrap(), 8080);
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text is not
/// valid YINI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Parse YINI text from an I/O stream into a [`Document`].
///
/// The whole stream is read into memory first; there is no incremental
/// parsing.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use yini::from_reader;
///
/// let doc = from_reader(Cursor::new("port = 8080")).unwrap();
/// assert!(doc.has_value("port"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or a parse error for invalid
/// YINI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Serialize a [`Document`] to YINI text with default options.
///
/// Serialization is total: every in-memory tree renders.
///
/// # Examples
///
/// ```rust
/// use yini::{Document, to_string};
///
/// let mut doc = Document::new();
/// doc.set("port", 8080);
/// assert_eq!(to_string(&doc), "port = 8080\n");
/// ```
#[must_use]
pub fn to_string(doc: &Document) -> String {
    to_string_with_options(doc, &WriteOptions::default())
}

/// Serialize a [`Document`] to YINI text with custom options.
///
/// # Examples
///
/// ```rust
/// use yini::{Document, Quote, WriteOptions, to_string_with_options};
///
/// let mut doc = Document::new();
/// doc.set("name", "demo");
///
/// let options = WriteOptions::new().with_quote(Quote::Double);
/// assert_eq!(to_string_with_options(&doc, &options), "name = \"demo\"\n");
/// ```
#[must_use]
pub fn to_string_with_options(doc: &Document, options: &WriteOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_document(doc);
    serializer.into_inner()
}

/// Serialize a [`Document`] to a writer as YINI text.
///
/// # Examples
///
/// ```rust
/// use yini::{Document, to_writer};
///
/// let mut doc = Document::new();
/// doc.set("port", 8080);
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"port = 8080\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, doc, &WriteOptions::default())
}

/// Serialize a [`Document`] to a writer as YINI text with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, doc: &Document, options: &WriteOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(doc, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
