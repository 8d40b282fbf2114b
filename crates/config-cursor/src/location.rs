/*
 * location.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Source location attached to tracked cursors.

use std::fmt;

/// Where a configuration value came from.
///
/// Cursors carry this around for diagnostics only and never inspect it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLocation {
    /// File name, or a descriptive label such as `env` for non-file sources
    pub source: String,
    /// 1-based line, if known
    pub line: Option<usize>,
    /// 1-based column, if known
    pub column: Option<usize>,
}

impl ConfigLocation {
    /// A location that only names its source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            line: None,
            column: None,
        }
    }

    /// Set the line and column.
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ConfigLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
            if let Some(column) = self.column {
                write!(f, ":{}", column)?;
            }
        }
        Ok(())
    }
}
