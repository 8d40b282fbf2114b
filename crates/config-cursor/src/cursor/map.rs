/*
 * cursor/map.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Cursor over a map node.

use super::{Cursor, PrimitiveCursor};
use crate::value::{ConfigMap, Value};
use std::sync::Arc;

/// A present structural node. Never null, never undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCursor {
    /// Always `Value::Map`, kept whole so `value()` can hand out a reference
    value: Value,
}

impl MapCursor {
    pub fn new(entries: ConfigMap) -> Self {
        Self {
            value: Value::Map(entries),
        }
    }

    /// The map itself, as a `Value::Map`.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.value.as_map().into_iter().flat_map(|entries| entries.keys())
    }

    /// Look up `key`:
    ///
    /// - missing key → undefined sentinel
    /// - nested map → new map cursor sharing the nested map
    /// - anything else, including explicit null → primitive cursor
    pub fn at_key(&self, key: &str) -> Cursor {
        match self.value.as_map().and_then(|entries| entries.get(key)) {
            None => Cursor::Undefined,
            Some(Value::Map(nested)) => Cursor::Map(MapCursor::new(Arc::clone(nested))),
            Some(leaf) => Cursor::Primitive(PrimitiveCursor::new(leaf.clone())),
        }
    }

    /// Rebuild the map with every reachable string leaf rewritten.
    pub fn transform(&self, f: &dyn Fn(&str) -> String) -> MapCursor {
        MapCursor {
            value: self.value.map_strings(f),
        }
    }
}
