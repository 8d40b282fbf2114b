/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Raw configuration data wrapped by cursors.
 */

//! Raw configuration values.
//!
//! A [`Value`] is the untyped tree a loader hands to the cursor layer: maps,
//! scalars, sequences and explicit nulls. Maps are reference counted so that
//! descending into a tree shares nested data instead of copying it.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// An insertion-ordered, shared mapping from string keys to nested values.
pub type ConfigMap = Arc<IndexMap<String, Value>>;

/// A raw configuration value.
///
/// Equality is structural. Reals compare by bit pattern, so a tree holding
/// `NaN` is equal to itself.
#[derive(Debug, Clone)]
pub enum Value {
    /// An explicit null (`key: ~` in YAML, `null` in JSON).
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),

    /// A list of values.
    ///
    /// Sequences are leaves as far as cursors are concerned: keys never
    /// index into them and `transform` does not rewrite their items.
    Sequence(Vec<Value>),

    /// A nested mapping, the only value with children.
    Map(ConfigMap),
}

impl Value {
    /// Build a map value from `(key, value)` pairs, keeping their order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(Arc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        ))
    }

    /// An empty map value.
    pub fn empty_map() -> Self {
        Value::Map(Arc::new(IndexMap::new()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Rewrite every string reachable through nested maps.
    ///
    /// Sequences and non-string scalars are returned unchanged.
    pub(crate) fn map_strings(&self, f: &dyn Fn(&str) -> String) -> Value {
        match self {
            Value::String(s) => Value::String(f(s)),
            Value::Map(entries) => Value::Map(map_entry_strings(entries, f)),
            other => other.clone(),
        }
    }
}

/// Rebuild a map with every reachable string leaf rewritten by `f`.
fn map_entry_strings(entries: &ConfigMap, f: &dyn Fn(&str) -> String) -> ConfigMap {
    Arc::new(
        entries
            .iter()
            .map(|(key, value)| (key.clone(), value.map_strings(f)))
            .collect(),
    )
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

/// Strings that would read as structure in the flow rendering get quoted.
fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.contains(|c: char| matches!(c, ',' | ':' | '{' | '}' | '[' | ']' | '"' | '\\'))
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Real(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Map(Arc::new(entries))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::String(s) if needs_quotes(s) => {
                write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
