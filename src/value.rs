//! Dynamic value representation for YINI data.
//!
//! This module provides the [`Value`] enum which represents any scalar or
//! array a YINI key can hold.
//!
//! ## Core Types
//!
//! - [`Value`]: a tagged union over the five YINI variants (string, int,
//!   float, bool, array)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use yini::Value;
//!
//! // From primitives
//! let text = Value::from("hello");
//! let number = Value::from(42);
//! let flag = Value::from(true);
//!
//! // Using the yini! macro
//! use yini::yini;
//! let ports = yini!([8080, 8443]);
//! assert!(ports.is_array());
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use yini::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_int());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! The `as_*` accessors apply the format's scalar coercions: numbers and
//! booleans convert to strings, numeric strings parse as numbers, and so on.
//! Arrays never convert to scalars and scalars never convert to arrays.
//!
//! ```rust
//! use yini::Value;
//!
//! let value = Value::from("123");
//! assert_eq!(value.as_int().unwrap(), 123);
//! assert_eq!(value.as_float().unwrap(), 123.0);
//! assert!(value.as_array().is_err());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed YINI value.
///
/// Every key in a YINI document maps to one of these five variants. Arrays
/// may nest arbitrarily.
///
/// # Examples
///
/// ```rust
/// use yini::Value;
///
/// let host = Value::String("localhost".to_string());
/// let port = Value::Int(8080);
/// let ratio = Value::Float(0.75);
///
/// assert!(host.is_string());
/// assert!(port.is_int());
/// assert!(ratio.is_float());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::String(String::new())
    }
}

impl Value {
    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// The variant name, used in conversion error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Array(_) => "array",
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// This is the strict, non-coercing counterpart of [`Value::as_string`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Converts the value to a string.
    ///
    /// Scalars coerce: integers and floats render as their literal text,
    /// booleans as `true`/`false`. Arrays fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Value;
    ///
    /// assert_eq!(Value::from(8080).as_string().unwrap(), "8080");
    /// assert_eq!(Value::from(true).as_string().unwrap(), "true");
    /// assert!(Value::Array(vec![]).as_string().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the value is an array.
    pub fn as_string(&self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s.clone()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(format!("{:?}", f)),
            Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            Value::Array(_) => Err(Error::conversion("string", "array")),
        }
    }

    /// Converts the value to an integer.
    ///
    /// Floats truncate toward zero; strings must parse as a whole `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Value;
    ///
    /// assert_eq!(Value::from(3.9).as_int().unwrap(), 3);
    /// assert_eq!(Value::from("123").as_int().unwrap(), 123);
    /// assert!(Value::from("123abc").as_int().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] for booleans, arrays, and unparseable strings.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Float(f) => Ok(*f as i64),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::conversion("int", "string")),
            Value::Bool(_) => Err(Error::conversion("int", "bool")),
            Value::Array(_) => Err(Error::conversion("int", "array")),
        }
    }

    /// Converts the value to a float.
    ///
    /// Integers widen; strings must parse as `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Value;
    ///
    /// assert_eq!(Value::from(42).as_float().unwrap(), 42.0);
    /// assert_eq!(Value::from("30.5").as_float().unwrap(), 30.5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] for booleans, arrays, and unparseable strings.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::conversion("float", "string")),
            Value::Bool(_) => Err(Error::conversion("float", "bool")),
            Value::Array(_) => Err(Error::conversion("float", "array")),
        }
    }

    /// Converts the value to a boolean.
    ///
    /// Strings are matched case-insensitively against the boolean vocabulary
    /// (`true`/`yes`/`on`/`1` and `false`/`no`/`off`/`0`); integers map zero
    /// to `false` and everything else to `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Value;
    ///
    /// assert!(Value::from("Yes").as_bool().unwrap());
    /// assert!(!Value::from(0).as_bool().unwrap());
    /// assert!(Value::from("maybe").as_bool().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] for floats, arrays, and strings outside
    /// the vocabulary.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => match s.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                _ => Err(Error::conversion("bool", "string")),
            },
            Value::Int(i) => Ok(*i != 0),
            Value::Float(_) => Err(Error::conversion("bool", "float")),
            Value::Array(_) => Err(Error::conversion("bool", "array")),
        }
    }

    /// Returns the array elements.
    ///
    /// Scalars never convert to arrays.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yini::Value;
    ///
    /// let v = Value::Array(vec![Value::Int(1), Value::Int(2)]);
    /// assert_eq!(v.as_array().unwrap().len(), 2);
    /// assert!(Value::from(1).as_array().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the value is not an array.
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::conversion("array", other.type_name())),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value in its YINI literal form, as the serializer writes it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::ser::write_value(&mut out, self, '\'');
        f.write_str(&out)
    }
}

// TryFrom implementations for extracting values, applying the same coercions
// as the as_* accessors.
impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_string()
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_int()
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_float()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_bool()
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(Error::conversion("array", other.type_name())),
        }
    }
}

// From implementations for creating a Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a YINI scalar or array")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Int(value as i64))
                } else {
                    Ok(Value::Float(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(element) = seq.next_element()? {
                    items.push(element);
                }
                Ok(Value::Array(items))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_coercions() {
        assert_eq!(Value::from("hello").as_string().unwrap(), "hello");
        assert_eq!(Value::Int(42).as_string().unwrap(), "42");
        assert_eq!(Value::Float(30.5).as_string().unwrap(), "30.5");
        assert_eq!(Value::Bool(false).as_string().unwrap(), "false");
        assert_eq!(
            Value::Array(vec![]).as_string(),
            Err(Error::conversion("string", "array"))
        );
    }

    #[test]
    fn test_int_coercions() {
        assert_eq!(Value::Int(42).as_int().unwrap(), 42);
        assert_eq!(Value::Float(3.9).as_int().unwrap(), 3);
        assert_eq!(Value::from("123").as_int().unwrap(), 123);
        assert_eq!(Value::from("-7").as_int().unwrap(), -7);
        assert!(Value::from("123abc").as_int().is_err());
        assert!(Value::Bool(true).as_int().is_err());
        assert!(Value::Array(vec![]).as_int().is_err());
    }

    #[test]
    fn test_float_coercions() {
        assert_eq!(Value::Float(30.5).as_float().unwrap(), 30.5);
        assert_eq!(Value::Int(42).as_float().unwrap(), 42.0);
        assert_eq!(Value::from("3.14").as_float().unwrap(), 3.14);
        assert!(Value::from("not a number").as_float().is_err());
    }

    #[test]
    fn test_bool_vocabulary() {
        for truthy in ["true", "TRUE", "yes", "Yes", "on", "1"] {
            assert!(Value::from(truthy).as_bool().unwrap(), "{}", truthy);
        }
        for falsy in ["false", "No", "OFF", "0"] {
            assert!(!Value::from(falsy).as_bool().unwrap(), "{}", falsy);
        }
        assert!(Value::from("maybe").as_bool().is_err());
        assert!(Value::Int(0).as_bool() == Ok(false));
        assert!(Value::Int(-3).as_bool() == Ok(true));
        assert!(Value::Float(1.0).as_bool().is_err());
    }

    #[test]
    fn test_array_never_coerces() {
        let arr = Value::Array(vec![Value::Int(1)]);
        assert!(arr.as_string().is_err());
        assert!(arr.as_int().is_err());
        assert!(arr.as_float().is_err());
        assert!(arr.as_bool().is_err());

        assert!(Value::from("x").as_array().is_err());
        assert!(Value::Int(1).as_array().is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(42u16), Value::Int(42));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(
            Value::from(vec![Value::Int(1)]),
            Value::Array(vec![Value::Int(1)])
        );
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i64::try_from(Value::from("55")).unwrap(), 55);
        assert_eq!(String::try_from(Value::Int(5)).unwrap(), "5");
        assert_eq!(bool::try_from(Value::from("off")).unwrap(), false);
        assert!(Vec::<Value>::try_from(Value::Int(5)).is_err());
        assert_eq!(
            Vec::<Value>::try_from(Value::Array(vec![Value::Bool(true)])).unwrap(),
            vec![Value::Bool(true)]
        );
    }

    #[test]
    fn test_default_is_empty_string() {
        assert_eq!(Value::default(), Value::String(String::new()));
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_array(v: &Value) -> bool {
            v.is_array()
        }

        assert!(check_array(&Value::Array(vec![])));
        assert!(Value::Int(1).is_int());
        assert!(!Value::Int(1).is_float());
    }
}
