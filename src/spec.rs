//! YINI Format Specification
//!
//! This module documents the YINI configuration format as implemented by
//! this library.
//!
//! # Overview
//!
//! YINI is a line-oriented hierarchical configuration format. Nesting is
//! expressed with leading caret markers instead of indentation, so files
//! stay readable without whitespace sensitivity: indentation is cosmetic
//! and ignored by the parser.
//!
//! ## Design Philosophy
//!
//! - **Indentation-free nesting**: section depth is carried by the `^` run,
//!   never by leading whitespace
//! - **Typed scalars**: values infer their type from the literal text
//! - **Forgiving input vocabulary, canonical output**: several boolean
//!   spellings parse, exactly one is ever written
//!
//! # Core Syntax
//!
//! ## Assignments
//!
//! A line without leading carets is a key/value assignment:
//!
//! ```text
//! host = 'localhost'
//! port = 8080
//! enabled = true
//! timeout = 30.5
//! ```
//!
//! **Rules**:
//! - The line splits at the first `=`; a line with no `=` is a parse error
//! - Key and value are trimmed of surrounding whitespace
//! - An empty key is a parse error
//! - An assignment belongs to the section most recently opened by a header
//!   (or the document root before any header)
//!
//! ## Section Headers
//!
//! A line starting with one or more `^` markers opens a section:
//!
//! ```text
//! ^ server
//! host = 'localhost'
//!
//!     ^^ auth
//!     enabled = true
//! ```
//!
//! - The marker count is the nesting depth: `^` is a top-level child of the
//!   root, `^^` a child of the current `^` section, and so on
//! - The remainder of the line, trimmed, is the section name
//! - A header at depth `d` truncates the open-section stack to `d - 1`
//!   entries and pushes its name; a later shallow header therefore re-roots
//!   subsequent assignments while previously parsed subtrees stay reachable
//! - A header that jumps more than one level deeper is accepted; the skipped
//!   levels are materialized as empty-named sections
//!
//! # Values
//!
//! Value literals are matched in fixed priority order:
//!
//! | Priority | Form | Example | Result |
//! |----------|------|---------|--------|
//! | 1 | Quoted string | `'hello'`, `"8080"` | the text between quotes, verbatim |
//! | 2 | Array | `[1, 2, 3]` | array of recursively parsed items |
//! | 3 | Boolean | `true`/`yes`/`on`, `false`/`no`/`off` (any case) | boolean |
//! | 4 | Number | `42`, `-7`, `30.5` | int, or float if the text contains `.` |
//! | 5 | Fallback | `plain text` | the trimmed text as a string |
//!
//! - Quoted strings have **no escape sequences**; the quote pair is simply
//!   stripped
//! - Array interiors are split on every top-level `,` with a flat scan that
//!   is *not* quote- or bracket-aware; empty items are skipped, so `[]` and
//!   `[ , ]` are both empty arrays
//! - An empty value (`key =`) is the empty string
//!
//! # Comments
//!
//! Two styles, stripped before and during the line scan:
//!
//! ```text
//! /* block comments
//!    span lines */
//! host = 'localhost'  // line comments run to the end of the line
//! ```
//!
//! - Block comments are removed first, as literal substring spans, with no
//!   nesting: the first `*/` after an opener closes it
//! - An unterminated `/*` silently discards everything to the end of the
//!   text; the document truncates there without error
//! - Line comments have no quote awareness: a `//` inside a quoted string
//!   still starts a comment
//!
//! # Output
//!
//! Serialization walks the tree pre-order:
//!
//! ```text
//! top = 1
//! ^ server
//!     host = 'localhost'
//!
//!     ^^ auth
//!         enabled = true
//! ```
//!
//! - A section at depth `d` writes its header indented `(d - 1) × 4` spaces
//!   with `d` carets, and its keys indented `d × 4` spaces
//! - A blank line precedes every section block except the first child of the
//!   root
//! - Strings are single-quoted by default, booleans always render as
//!   `true`/`false`, arrays as `[a, b, c]`
//!
//! # Limitations
//!
//! - **Quote characters in strings**: string values are written verbatim
//!   between quotes with no escaping, so a value containing the quote
//!   character does not survive a round trip
//! - **Commas in nested array strings**: the flat array split also divides
//!   on commas inside nested quoted strings or nested arrays
//! - **Comments**: never preserved through a parse/serialize round trip
//! - **Boolean spellings**: `yes`/`no`/`on`/`off` parse but re-serialize as
//!   `true`/`false`

// This module contains only documentation; no implementation code
