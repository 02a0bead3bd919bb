//! YINI parsing.
//!
//! This module provides the [`Parser`] that turns YINI text into a
//! [`Document`] tree.
//!
//! ## Overview
//!
//! Parsing is line-oriented and single-pass after an initial comment sweep:
//!
//! 1. Block comments (`/* ... */`) are stripped from the whole text as
//!    literal substring spans. An unterminated block comment swallows
//!    everything to the end of the text without raising an error.
//! 2. Each remaining line is stripped of its `//` comment tail, trimmed, and
//!    classified: a run of leading `^` marks a section header, anything else
//!    must be a `key = value` assignment.
//! 3. Section headers drive a stack of open section names; assignments land
//!    in the section the stack currently resolves to.
//!
//! The first malformed line aborts parsing with [`Error::Parse`]; no partial
//! document is returned.
//!
//! ## Usage
//!
//! Most users should use [`from_str`](crate::from_str):
//!
//! ```rust
//! use yini::from_str;
//!
//! let doc = from_str("^ server\nport = 8080").unwrap();
//! assert_eq!(doc.get_section("server").unwrap().get("port").unwrap().as_int().unwrap(), 8080);
//! ```

use crate::{Document, Error, Result, Value};

/// The YINI parser.
///
/// Holds a borrowed input text; [`Parser::parse`] builds a fresh
/// [`Document`] from it.
pub struct Parser<'a> {
    input: &'a str,
}

/// Trims the whitespace set the format recognizes: space, tab, CR, LF.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Removes every `/* ... */` span from `input` as a literal substring match.
///
/// Not nesting-aware: the first `*/` after an opener closes it, whatever
/// appeared in between. An opener with no closer discards the rest of the
/// text silently.
fn strip_block_comments(input: &str) -> String {
    let mut text = input.to_string();
    let mut from = 0;
    while let Some(found) = text[from..].find("/*") {
        let open = from + found;
        match text[open + 2..].find("*/") {
            Some(rel) => {
                let close = open + 2 + rel;
                text.replace_range(open..close + 2, "");
                from = open;
            }
            None => {
                text.truncate(open);
                break;
            }
        }
    }
    text
}

/// Discards the first `//` and everything after it on the line.
///
/// No escaping: a `//` inside a quoted string still starts a comment. This
/// is a limitation of the format itself.
fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Counts the run of `^` markers at the start of the line.
fn marker_depth(line: &str) -> usize {
    line.chars().take_while(|&c| c == '^').count()
}

/// Flat top-level split of an array interior on `,`.
///
/// Deliberately not quote- or bracket-aware: a comma inside a nested quoted
/// string or nested array splits too. This is part of the format's contract,
/// not an implementation shortcut to be upgraded.
fn split_flat(interior: &str) -> std::str::Split<'_, char> {
    interior.split(',')
}

/// The stack of currently open section names.
///
/// A header bearing `d` markers resizes the stack to `d - 1` entries and
/// pushes its name. `resize` truncates on shrink and pads with empty names
/// on growth, so a header that jumps more than one level deeper materializes
/// empty-named intermediate sections when the stack is resolved against the
/// tree. Both behaviors are deliberate and observable.
#[derive(Debug, Default)]
struct SectionStack {
    names: Vec<String>,
}

impl SectionStack {
    fn resize(&mut self, len: usize) {
        self.names.resize(len, String::new());
    }

    fn push(&mut self, name: String) {
        self.names.push(name);
    }

    /// Walks the stack down from `root`, creating missing sections on the way.
    fn resolve<'a>(&self, root: &'a mut crate::Section) -> &'a mut crate::Section {
        let mut current = root;
        for name in &self.names {
            current = current.section(name.as_str());
        }
        current
    }
}

/// Parses a single YINI value literal.
///
/// The grammar is tried in fixed priority order: quoted string, array,
/// boolean vocabulary, number, raw string fallback. It is total — any text
/// that matches nothing earlier is a string.
///
/// # Examples
///
/// ```rust
/// use yini::{parse_value, Value};
///
/// assert_eq!(parse_value("42"), Value::Int(42));
/// assert_eq!(parse_value("'42'"), Value::String("42".to_string()));
/// assert_eq!(parse_value("off"), Value::Bool(false));
/// assert_eq!(parse_value("[1, 2]"), Value::Array(vec![Value::Int(1), Value::Int(2)]));
/// assert_eq!(parse_value("plain text"), Value::String("plain text".to_string()));
/// ```
pub fn parse_value(text: &str) -> Value {
    let trimmed = trim(text);

    // The quote and bracket checks below index the first and last byte, so
    // empty value text is decided here: it is an empty string.
    if trimmed.is_empty() {
        return Value::String(String::new());
    }

    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);

        // Quoted string: the text between the quotes, verbatim. No escapes.
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return Value::String(trimmed[1..trimmed.len() - 1].to_string());
        }

        if first == b'[' && last == b']' {
            let interior = &trimmed[1..trimmed.len() - 1];
            let items = split_flat(interior)
                .map(trim)
                .filter(|piece| !piece.is_empty())
                .map(parse_value)
                .collect();
            return Value::Array(items);
        }
    }

    match trimmed.to_lowercase().as_str() {
        "true" | "yes" | "on" => return Value::Bool(true),
        "false" | "no" | "off" => return Value::Bool(false),
        _ => {}
    }

    if trimmed.contains('.') {
        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }
    } else if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int(i);
    }

    Value::String(trimmed.to_string())
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser { input }
    }

    /// Parses the input into a fresh [`Document`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with the 1-based line number on the first
    /// assignment line with no `=` or with an empty key.
    pub fn parse(&self) -> Result<Document> {
        let mut doc = Document::new();
        let cleaned = strip_block_comments(self.input);
        let mut stack = SectionStack::default();

        for (index, raw_line) in cleaned.lines().enumerate() {
            let line_number = index + 1;
            let line = trim(strip_line_comment(raw_line));

            if line.is_empty() {
                continue;
            }

            let depth = marker_depth(line);
            if depth > 0 {
                let name = trim(&line[depth..]);
                stack.resize(depth - 1);
                stack.push(name.to_string());
            } else {
                let (key, value_text) = match line.split_once('=') {
                    Some((key, value_text)) => (trim(key), trim(value_text)),
                    None => {
                        return Err(Error::parse(
                            line_number,
                            format!("invalid line, expected 'key = value': {line}"),
                        ));
                    }
                };

                if key.is_empty() {
                    return Err(Error::parse(line_number, format!("empty key: {line}")));
                }

                let target = stack.resolve(doc.root_mut());
                target.set(key, parse_value(value_text));
            }
        }

        Ok(doc)
    }
}
