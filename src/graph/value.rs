//! Attribute values for node and edge data/metadata bags
//!
//! Bags are free-form, insertion-ordered string-keyed maps. The value
//! variant mirrors JSON so the bags serialize as plain objects.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute value
///
/// Untagged so that serialized bags look like ordinary JSON objects and
/// round-trip without wrapper tags. `Integer` is listed before `Float` so
/// whole numbers deserialize as integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<AttrValue>),
    Map(AttrMap),
}

/// Attribute map for node and edge data/metadata
pub type AttrMap = IndexMap<String, AttrValue>;

impl AttrValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get array value if this is an array
    pub fn as_array(&self) -> Option<&Vec<AttrValue>> {
        match self {
            AttrValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get map value if this is a map
    pub fn as_map(&self) -> Option<&AttrMap> {
        match self {
            AttrValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "Null",
            AttrValue::Boolean(_) => "Boolean",
            AttrValue::Integer(_) => "Integer",
            AttrValue::Float(_) => "Float",
            AttrValue::String(_) => "String",
            AttrValue::Array(_) => "Array",
            AttrValue::Map(_) => "Map",
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "null"),
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::Integer(i) => write!(f, "{}", i),
            AttrValue::Float(fl) => write!(f, "{}", fl),
            AttrValue::String(s) => write!(f, "\"{}\"", s),
            AttrValue::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            AttrValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenience conversions
impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Integer(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Boolean(b)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(arr: Vec<AttrValue>) -> Self {
        AttrValue::Array(arr)
    }
}

impl From<AttrMap> for AttrValue {
    fn from(map: AttrMap) -> Self {
        AttrValue::Map(map)
    }
}

/// Shallow merge of `updates` into `existing`
///
/// Keys present in `updates` replace same-named keys; all other existing
/// keys are preserved. Surviving keys keep their original position.
pub fn merge_attrs(existing: &mut AttrMap, updates: AttrMap) {
    for (key, value) in updates {
        existing.insert(key, value);
    }
}
