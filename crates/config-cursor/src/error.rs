/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Errors from converting parsed documents into configuration values.
//!
//! Cursors themselves never fail; missing and null values are ordinary
//! cursor states.

use thiserror::Error;

/// Errors that can occur while building a [`Value`](crate::Value) tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration nesting exceeds maximum depth.
    #[error("Config nesting too deep (max depth: {max_depth}) at path: {}", path.join("."))]
    NestingTooDeep {
        /// Maximum allowed depth
        max_depth: usize,
        /// Path where the limit was exceeded
        path: Vec<String>,
    },

    /// A number that cannot be represented as an `i64` or `f64`.
    #[error("Invalid number '{text}' at path: {}", path.join("."))]
    InvalidNumber {
        /// The offending literal
        text: String,
        /// Path of the value
        path: Vec<String>,
    },
}
