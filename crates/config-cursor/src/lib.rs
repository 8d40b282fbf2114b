//! Lazy, layered cursors over hierarchical configuration data.
//!
//! This crate provides a navigable view over nested key/value configuration
//! (from files, the environment, or in-memory maps) that can be layered
//! without ever merging the underlying data.
//!
//! # Key Features
//!
//! - **Three-valued lookups**: a position is present, explicitly null, or
//!   undefined, and lookups never fail
//! - **Lazy layering**: `with_fallback` fills a primary source's gaps from a
//!   fallback source at every depth, without copying either
//! - **Structure-preserving rewrites**: `transform` rewrites every string leaf,
//!   e.g. for `${VAR}` interpolation
//! - **Provenance**: tracked cursors report the path and source location of
//!   every value reached from them
//!
//! # Architecture
//!
//! - [`Value`]: raw configuration data (maps, scalars, sequences, null)
//! - [`Cursor`]: a position in one or more `Value` trees
//! - [`value_from_yaml`] / [`value_from_json`]: adapters from parsed documents
//! - [`interpolate`]: `${NAME}` rewrite functions for `Cursor::transform`
//!
//! # Example
//!
//! ```rust
//! use config_cursor::{ConvertOptions, Cursor, Value, value_from_yaml};
//! use yaml_rust2::YamlLoader;
//!
//! let load = |text: &str| {
//!     let docs = YamlLoader::load_from_str(text).unwrap();
//!     Cursor::new(value_from_yaml(&docs[0], &ConvertOptions::default()).unwrap())
//! };
//!
//! let project = load("format:\n  html:\n    theme: cosmo\n    toc: true\n");
//! let document = load("format:\n  html:\n    theme: darkly\n");
//!
//! let config = Cursor::layered([document, project]);
//! let html = config.at_path(&["format", "html"]);
//! assert_eq!(html.at_key("theme").value(), Some(&Value::from("darkly")));
//! assert_eq!(html.at_key("toc").value(), Some(&Value::Bool(true)));
//! ```

mod convert;
mod cursor;
mod error;
pub mod interpolate;
mod location;
mod value;

pub use convert::{ConvertOptions, value_from_json, value_from_yaml};

pub use cursor::{Cursor, FallbackCursor, MapCursor, PrimitiveCursor, TrackedCursor};

pub use error::ConfigError;

pub use location::ConfigLocation;

pub use value::{ConfigMap, Value};
