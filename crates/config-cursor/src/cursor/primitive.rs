/*
 * cursor/primitive.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Cursor over a terminal scalar.

use crate::value::Value;

/// A present leaf. Holds any non-map value, including an explicit null.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveCursor {
    value: Value,
}

impl PrimitiveCursor {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Rewrite the held value if it is a string.
    pub fn transform(&self, f: &dyn Fn(&str) -> String) -> PrimitiveCursor {
        match &self.value {
            Value::String(s) => PrimitiveCursor::new(Value::String(f(s))),
            other => PrimitiveCursor::new(other.clone()),
        }
    }
}
