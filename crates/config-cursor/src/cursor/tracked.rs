/*
 * cursor/tracked.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Cursors that remember how they were reached.
//!
//! The base cursors carry no provenance. Wrapping a root cursor with
//! [`Cursor::tracked`] makes every descendant report the keys walked to reach
//! it and the location of the source it came from, which decoders use when
//! reporting a missing key or a type mismatch.

use super::Cursor;
use crate::location::ConfigLocation;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackedCursor {
    inner: Cursor,
    /// Deepest key first
    path: Vec<String>,
    location: Option<ConfigLocation>,
}

impl TrackedCursor {
    pub fn new(inner: Cursor, path: Vec<String>, location: Option<ConfigLocation>) -> Self {
        Self {
            inner,
            path,
            location,
        }
    }

    pub fn inner(&self) -> &Cursor {
        &self.inner
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn location(&self) -> Option<&ConfigLocation> {
        self.location.as_ref()
    }

    /// Descend the inner cursor, prepending `key` to the path.
    ///
    /// Missing keys stay tracked so the path of the absent value is still
    /// available for diagnostics.
    pub fn at_key(&self, key: &str) -> Cursor {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.push(key.to_string());
        path.extend(self.path.iter().cloned());
        Cursor::Tracked(Arc::new(TrackedCursor::new(
            self.inner.at_key(key),
            path,
            self.location.clone(),
        )))
    }

    pub fn transform(&self, f: &dyn Fn(&str) -> String) -> TrackedCursor {
        TrackedCursor::new(
            self.inner.transform_with(f),
            self.path.clone(),
            self.location.clone(),
        )
    }

    /// Path in reading order, joined with dots (`format.html.theme`).
    pub fn dotted_path(&self) -> String {
        self.path
            .iter()
            .rev()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }
}
