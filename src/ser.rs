//! YINI serialization.
//!
//! This module provides the [`Serializer`] that renders a
//! [`Document`] tree back to YINI text.
//!
//! ## Overview
//!
//! Rendering is a pre-order walk of the tree:
//!
//! - The root's keys come first, one `key = value` line each.
//! - Each child section renders a caret header, its own keys, then its
//!   children, one nesting level deeper. A blank line is written before every
//!   section block except the first one directly under the root.
//! - Strings render quoted verbatim, booleans always as `true`/`false`
//!   regardless of how they were spelled in the source, arrays as
//!   `[a, b, c]`.
//!
//! Serialization is total: every in-memory tree renders without error.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use yini::{Document, to_string};
//!
//! let mut doc = Document::new();
//! doc.set("enabled", true);
//! doc.section("server").set("port", 8080);
//!
//! assert_eq!(to_string(&doc), "enabled = true\n^ server\n    port = 8080\n");
//! ```

use crate::{Document, Section, Value, WriteOptions};

/// The YINI serializer.
///
/// Accumulates output text over a pre-order walk of a document tree.
/// Created via [`Serializer::new`] with customizable options.
pub struct Serializer {
    output: String,
    options: WriteOptions,
}

/// Renders one value in its literal form into `out`.
///
/// Strings are wrapped in `quote` verbatim: an embedded quote character is
/// not escaped and will not survive a re-parse. That gap is part of the
/// format's contract.
pub(crate) fn write_value(out: &mut String, value: &Value, quote: char) {
    match value {
        Value::String(s) => {
            out.push(quote);
            out.push_str(s);
            out.push(quote);
        }
        Value::Int(i) => out.push_str(&i.to_string()),
        // Debug formatting keeps the decimal point, so a whole float
        // re-parses as a float.
        Value::Float(f) => out.push_str(&format!("{:?}", f)),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_value(out, item, quote);
            }
            out.push(']');
        }
    }
}

impl Serializer {
    #[must_use]
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Renders `doc` into the output buffer.
    pub fn write_document(&mut self, doc: &Document) {
        self.write_section(doc.root(), None, 0);
    }

    /// Consumes the serializer and returns the rendered text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level * self.options.indent {
            self.output.push(' ');
        }
    }

    /// Renders a section: header (unless this is the unnamed root), keys,
    /// then child sections one level deeper.
    fn write_section(&mut self, section: &Section, name: Option<&str>, level: usize) {
        if let Some(name) = name {
            self.indent(level);
            for _ in 0..=level {
                self.output.push('^');
            }
            self.output.push(' ');
            self.output.push_str(name);
            self.output.push('\n');
        }

        let value_level = level + usize::from(name.is_some());
        let quote = self.options.quote.as_char();
        for (key, value) in section.values() {
            self.indent(value_level);
            self.output.push_str(key);
            self.output.push_str(" = ");
            write_value(&mut self.output, value, quote);
            self.output.push('\n');
        }

        for (index, (child_name, child)) in section.sections().enumerate() {
            // Blank separator before every section block except the first
            // child of the root.
            if name.is_some() || index > 0 {
                self.output.push('\n');
            }
            self.write_section(child, Some(child_name), value_level);
        }
    }
}
