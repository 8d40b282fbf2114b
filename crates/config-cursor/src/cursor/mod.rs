/*
 * cursor/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The Cursor type: a navigable, immutable position in one or more
 * configuration trees.
 */

//! Cursor-based navigation of layered configuration.
//!
//! # Design
//!
//! - `Cursor` is a closed enum over four base variants (map, primitive,
//!   undefined, fallback) plus a provenance-tracking wrapper
//! - Every operation is total: a lookup that cannot be resolved yields
//!   [`Cursor::Undefined`] instead of an error
//! - Nothing is merged or copied eagerly; a fallback composite answers each
//!   question by asking both of its sides
//! - Cursors are never mutated. `at_key`, `transform` and `with_fallback`
//!   all return new cursors
//!
//! Every cursor is in exactly one of three states:
//!
//! | state             | `is_undefined()` | `is_null()` |
//! |-------------------|------------------|-------------|
//! | present, non-null | false            | false       |
//! | present, null     | false            | true        |
//! | undefined         | true             | false       |
//!
//! # Example
//!
//! ```rust
//! use config_cursor::{Cursor, Value};
//!
//! let overrides = Cursor::new(Value::map([
//!     ("db", Value::map([("host", Value::from("localhost"))])),
//! ]));
//! let defaults = Cursor::new(Value::map([(
//!     "db",
//!     Value::map([("host", Value::from("prod")), ("port", Value::from("5432"))]),
//! )]));
//!
//! let config = overrides.with_fallback(defaults);
//! let db = config.at_key("db");
//! assert_eq!(db.at_key("host").value(), Some(&Value::from("localhost")));
//! assert_eq!(db.at_key("port").value(), Some(&Value::from("5432")));
//! assert!(db.at_key("user").is_undefined());
//! ```

mod fallback;
mod map;
mod primitive;
mod tracked;

pub use fallback::FallbackCursor;
pub use map::MapCursor;
pub use primitive::PrimitiveCursor;
pub use tracked::TrackedCursor;

use crate::location::ConfigLocation;
use crate::value::{ConfigMap, Value};
use indexmap::IndexSet;
use std::sync::Arc;

/// A position within one or more configuration trees.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cursor {
    /// A present structural node backed by a map.
    Map(MapCursor),

    /// A present leaf, possibly an explicit null.
    Primitive(PrimitiveCursor),

    /// No value exists at this position.
    ///
    /// Looking up any key on it, or transforming it, yields itself.
    #[default]
    Undefined,

    /// A primary cursor whose gaps are filled from a fallback cursor.
    Fallback(Arc<FallbackCursor>),

    /// A cursor that remembers its path and source location.
    Tracked(Arc<TrackedCursor>),
}

impl Cursor {
    /// Wrap a raw value: maps become map cursors, everything else a
    /// primitive cursor.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Map(entries) => Cursor::from_map(entries),
            other => Cursor::primitive(other),
        }
    }

    pub fn from_map(entries: ConfigMap) -> Self {
        Cursor::Map(MapCursor::new(entries))
    }

    pub fn primitive(value: Value) -> Self {
        Cursor::Primitive(PrimitiveCursor::new(value))
    }

    /// The undefined sentinel.
    pub fn undefined() -> Self {
        Cursor::Undefined
    }

    /// Wrap `inner` so that it and every cursor derived from it by
    /// `at_key` reports a path and `location`.
    pub fn tracked(inner: Cursor, location: Option<ConfigLocation>) -> Self {
        Cursor::Tracked(Arc::new(TrackedCursor::new(inner, Vec::new(), location)))
    }

    /// Compose layers in priority order: the first layer wins, each later
    /// layer fills the gaps of everything before it.
    ///
    /// An empty iterator yields the undefined sentinel.
    pub fn layered<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Cursor>,
    {
        let mut layers = layers.into_iter();
        let Some(first) = layers.next() else {
            return Cursor::Undefined;
        };
        layers.fold(first, |composed, layer| {
            tracing::trace!("adding fallback layer");
            composed.with_fallback(layer)
        })
    }

    /// The raw value at this position, or `None` when undefined.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Cursor::Map(map) => Some(map.value()),
            Cursor::Primitive(primitive) => Some(primitive.value()),
            Cursor::Undefined => None,
            Cursor::Fallback(fallback) => fallback.value(),
            Cursor::Tracked(tracked) => tracked.inner().value(),
        }
    }

    /// Keys from this position back to the root, deepest first.
    ///
    /// Only tracked cursors populate this.
    pub fn path(&self) -> &[String] {
        match self {
            Cursor::Tracked(tracked) => tracked.path(),
            _ => &[],
        }
    }

    /// Where this value came from, if known.
    pub fn location(&self) -> Option<&ConfigLocation> {
        match self {
            Cursor::Tracked(tracked) => tracked.location(),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        match self {
            Cursor::Map(_) | Cursor::Primitive(_) => false,
            Cursor::Undefined => true,
            Cursor::Fallback(fallback) => fallback.is_undefined(),
            Cursor::Tracked(tracked) => tracked.inner().is_undefined(),
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Cursor::Map(_) | Cursor::Undefined => false,
            Cursor::Primitive(primitive) => primitive.is_null(),
            Cursor::Fallback(fallback) => fallback.is_null(),
            Cursor::Tracked(tracked) => tracked.inner().is_null(),
        }
    }

    /// Descend one level. Never fails: missing keys yield an undefined cursor.
    pub fn at_key(&self, key: &str) -> Cursor {
        match self {
            Cursor::Map(map) => map.at_key(key),
            Cursor::Primitive(_) | Cursor::Undefined => Cursor::Undefined,
            Cursor::Fallback(fallback) => fallback.at_key(key),
            Cursor::Tracked(tracked) => tracked.at_key(key),
        }
    }

    /// Descend through several keys at once.
    pub fn at_path(&self, path: &[&str]) -> Cursor {
        path.iter().fold(self.clone(), |cursor, key| cursor.at_key(key))
    }

    /// Child keys visible from this position.
    ///
    /// For a fallback composite these are the primary's keys followed by the
    /// fallback's keys that the primary does not have.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Cursor::Map(map) => map.keys().cloned().collect(),
            Cursor::Primitive(_) | Cursor::Undefined => Vec::new(),
            Cursor::Fallback(fallback) => {
                let mut keys: IndexSet<String> = fallback.primary().keys().into_iter().collect();
                keys.extend(fallback.fallback().keys());
                keys.into_iter().collect()
            }
            Cursor::Tracked(tracked) => tracked.inner().keys(),
        }
    }

    /// Rewrite every string leaf reachable from this position.
    ///
    /// The result has the same shape and variants as `self`; non-string
    /// leaves are kept as they are.
    pub fn transform<F>(&self, f: F) -> Cursor
    where
        F: Fn(&str) -> String,
    {
        self.transform_with(&f)
    }

    pub(crate) fn transform_with(&self, f: &dyn Fn(&str) -> String) -> Cursor {
        match self {
            Cursor::Map(map) => Cursor::Map(map.transform(f)),
            Cursor::Primitive(primitive) => Cursor::Primitive(primitive.transform(f)),
            Cursor::Undefined => Cursor::Undefined,
            Cursor::Fallback(fallback) => fallback.transform(f),
            Cursor::Tracked(tracked) => Cursor::Tracked(Arc::new(tracked.transform(f))),
        }
    }

    /// Use `other` to fill every gap in `self`, at every depth.
    pub fn with_fallback(self, other: Cursor) -> Cursor {
        Cursor::Fallback(Arc::new(FallbackCursor::new(self, other)))
    }
}

impl From<Value> for Cursor {
    fn from(value: Value) -> Self {
        Cursor::new(value)
    }
}
