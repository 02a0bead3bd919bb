//! The YINI document tree.
//!
//! This module provides [`Section`], a node holding keyed values and named
//! child sections, and [`Document`], the owning wrapper around the root
//! section.
//!
//! ## Why IndexMap?
//!
//! Both maps inside a section are [`IndexMap`]s rather than `HashMap`s:
//!
//! - **Deterministic output**: keys and sections serialize in a consistent order
//! - **Iteration order**: entries are iterated in insertion order
//! - **Compatibility**: predictable output makes testing and diffing easy
//!
//! ## Examples
//!
//! ```rust
//! use yini::{Document, Value};
//!
//! let mut doc = Document::new();
//! doc.set("host", "localhost");
//! doc.section("server").set("port", 8080);
//!
//! assert_eq!(doc.get("host").unwrap(), &Value::String("localhost".into()));
//! assert!(doc.has_section("server"));
//! ```

use crate::{Error, Result, Value};
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A node in the configuration tree.
///
/// A section owns a mapping from key to [`Value`] and a mapping from name to
/// child `Section`. Children are exclusively owned; the tree has no sharing
/// and no cycles, and dropping a section drops all its descendants.
///
/// # Examples
///
/// ```rust
/// use yini::Section;
///
/// let mut section = Section::new();
/// section.set("enabled", true);
/// section.section("limits").set("max_connections", 64);
///
/// assert!(section.has_value("enabled"));
/// assert!(section.get_section("limits").unwrap().has_value("max_connections"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    values: IndexMap<String, Value>,
    children: IndexMap<String, Section>,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Section::default()
    }

    /// Returns the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::{Section, Value};
    ///
    /// let mut section = Section::new();
    /// section.set("port", 8080);
    /// assert_eq!(section.get("port").unwrap(), &Value::Int(8080));
    /// assert!(section.get("missing").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.values
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Stores `value` under `key`, replacing and returning any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Removes the value stored under `key`, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    /// Returns `true` if the section holds a value under `key`.
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the child section named `name`, creating it if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Section;
    ///
    /// let mut root = Section::new();
    /// root.section("server").section("auth").set("enabled", true);
    /// assert!(root.has_section("server"));
    /// ```
    pub fn section(&mut self, name: impl Into<String>) -> &mut Section {
        self.children.entry(name.into()).or_default()
    }

    /// Returns the child section named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if no such child exists.
    pub fn get_section(&self, name: &str) -> Result<&Section> {
        self.children
            .get(name)
            .ok_or_else(|| Error::SectionNotFound(name.to_string()))
    }

    /// Returns `true` if a child section named `name` exists.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Attaches `section` as the child named `name`, replacing any previous child.
    pub fn set_section(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
        self.children.insert(name.into(), section)
    }

    /// Returns an iterator over the section's key/value pairs, in insertion order.
    pub fn values(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Returns an iterator over the section's keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.values.keys()
    }

    /// Returns an iterator over the child sections, in insertion order.
    pub fn sections(&self) -> indexmap::map::Iter<'_, String, Section> {
        self.children.iter()
    }

    /// Returns an iterator over the child section names, in insertion order.
    pub fn section_names(&self) -> indexmap::map::Keys<'_, String, Section> {
        self.children.keys()
    }

    /// Returns `true` if the section holds no values and no child sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.is_empty()
    }

    /// Removes all values and child sections.
    pub fn clear(&mut self) {
        self.values.clear();
        self.children.clear();
    }
}

/// A YINI document: the owning wrapper around the root [`Section`].
///
/// Created empty via [`Document::new`] or by parsing text with
/// [`from_str`](crate::from_str). All root-level accessors delegate to the
/// root section.
///
/// # Examples
///
/// ```rust
/// use yini::Document;
///
/// let doc: Document = "retries = 3\n^ server\nhost = 'localhost'".parse().unwrap();
/// assert_eq!(doc.get("retries").unwrap().as_int().unwrap(), 3);
/// assert_eq!(
///     doc.get_section("server").unwrap().get("host").unwrap().as_string().unwrap(),
///     "localhost"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Section,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document::default()
    }

    /// Returns the root section.
    #[must_use]
    pub fn root(&self) -> &Section {
        &self.root
    }

    /// Returns the root section mutably.
    pub fn root_mut(&mut self) -> &mut Section {
        &mut self.root
    }

    /// Returns the root-level value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.root.get(key)
    }

    /// Stores `value` under `key` at the root level.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.root.set(key, value)
    }

    /// Removes the root-level value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.root.remove(key)
    }

    /// Returns `true` if the root section holds a value under `key`.
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.root.has_value(key)
    }

    /// Returns the top-level section named `name`, creating it if absent.
    pub fn section(&mut self, name: impl Into<String>) -> &mut Section {
        self.root.section(name)
    }

    /// Returns the top-level section named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if no such section exists.
    pub fn get_section(&self, name: &str) -> Result<&Section> {
        self.root.get_section(name)
    }

    /// Returns `true` if a top-level section named `name` exists.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.root.has_section(name)
    }

    /// Returns `true` if the document holds no values and no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Removes everything from the document.
    pub fn clear(&mut self) {
        self.root.clear();
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

impl fmt::Display for Document {
    /// Renders the document as YINI text with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len() + self.children.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        for (name, child) in &self.children {
            map.serialize_entry(name, child)?;
        }
        map.end()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

/// One entry of an incoming serde map: a scalar/array lands as a value,
/// a nested map becomes a child section.
enum Node {
    Value(Value),
    Section(Section),
}

struct SectionVisitor;

impl<'de> Visitor<'de> for SectionVisitor {
    type Value = Section;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of YINI values and nested sections")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut section = Section::new();
        while let Some((key, node)) = map.next_entry::<String, Node>()? {
            match node {
                Node::Value(value) => {
                    section.set(key, value);
                }
                Node::Section(child) => {
                    section.set_section(key, child);
                }
            }
        }
        Ok(section)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::SeqAccess;

        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a YINI scalar, array, or nested map")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Node::Value(Value::Bool(value)))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Node::Value(Value::Int(value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Node::Value(Value::Int(value as i64)))
                } else {
                    Ok(Node::Value(Value::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Node::Value(Value::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Node::Value(Value::String(value.to_string())))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Node::Value(Value::String(value)))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(element) = seq.next_element()? {
                    items.push(element);
                }
                Ok(Node::Value(Value::Array(items)))
            }

            fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                SectionVisitor.visit_map(map).map(Node::Section)
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SectionVisitor)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Document {
            root: Section::deserialize(deserializer)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut doc = Document::new();
        doc.set("name", "test");
        doc.set("count", 3);

        assert_eq!(doc.get("name").unwrap(), &Value::String("test".into()));
        assert_eq!(doc.get("count").unwrap(), &Value::Int(3));
        assert_eq!(doc.get("missing"), Err(Error::KeyNotFound("missing".into())));
    }

    #[test]
    fn test_set_replaces() {
        let mut section = Section::new();
        assert!(section.set("key", 1).is_none());
        assert_eq!(section.set("key", 2), Some(Value::Int(1)));
        assert_eq!(section.get("key").unwrap(), &Value::Int(2));
    }

    #[test]
    fn test_section_get_or_create() {
        let mut doc = Document::new();
        assert!(!doc.has_section("server"));

        doc.section("server").set("port", 8080);
        assert!(doc.has_section("server"));

        // Repeated access returns the same child
        doc.section("server").set("host", "localhost");
        let server = doc.get_section("server").unwrap();
        assert!(server.has_value("port"));
        assert!(server.has_value("host"));
    }

    #[test]
    fn test_get_section_missing() {
        let doc = Document::new();
        assert_eq!(
            doc.get_section("nope").unwrap_err(),
            Error::SectionNotFound("nope".into())
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut section = Section::new();
        section.set("b", 1);
        section.set("a", 2);
        section.set("c", 3);

        let keys: Vec<_> = section.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut section = Section::new();
        section.set("a", 1);
        section.set("b", 2);
        section.set("c", 3);

        assert_eq!(section.remove("b"), Some(Value::Int(2)));
        let keys: Vec<_> = section.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_clear() {
        let mut doc = Document::new();
        doc.set("key", 1);
        doc.section("child");
        assert!(!doc.is_empty());

        doc.clear();
        assert!(doc.is_empty());
    }
}
