/*
 * convert.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Conversion from parsed YAML and JSON documents to raw configuration values.
 */

//! Conversion from parsed documents to [`Value`] trees.
//!
//! Parsing itself is left to `yaml-rust2` and `serde_json`; this module only
//! maps their trees onto [`Value`], enforcing a nesting limit so that a
//! hostile document cannot overflow the stack when cursors later recurse
//! through it.

use crate::error::ConfigError;
use crate::value::Value;
use indexmap::IndexMap;
use yaml_rust2::Yaml;

/// Options for conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Maximum nesting depth (default: 256).
    ///
    /// Conversion fails with `ConfigError::NestingTooDeep` beyond this depth.
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Convert a parsed YAML document to a `Value`.
///
/// - Hashes become maps. String keys are kept as is; integer, real and
///   boolean keys are stringified; any other key is skipped.
/// - `Null`, aliases and bad values become `Value::Null`.
/// - Reals are parsed to `f64`, including `.inf` and `.nan`.
pub fn value_from_yaml(yaml: &Yaml, options: &ConvertOptions) -> Result<Value, ConfigError> {
    let mut path = Vec::new();
    convert_yaml(yaml, options, 0, &mut path)
}

/// Convert a parsed JSON document to a `Value`.
///
/// Numbers become `Integer` when they fit in an `i64`, `Real` otherwise.
pub fn value_from_json(
    json: &serde_json::Value,
    options: &ConvertOptions,
) -> Result<Value, ConfigError> {
    let mut path = Vec::new();
    convert_json(json, options, 0, &mut path)
}

fn check_depth(depth: usize, options: &ConvertOptions, path: &[String]) -> Result<(), ConfigError> {
    if depth > options.max_depth {
        return Err(ConfigError::NestingTooDeep {
            max_depth: options.max_depth,
            path: path.to_vec(),
        });
    }
    Ok(())
}

fn yaml_key(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Real(r) => Some(r.clone()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

fn convert_yaml(
    yaml: &Yaml,
    options: &ConvertOptions,
    depth: usize,
    path: &mut Vec<String>,
) -> Result<Value, ConfigError> {
    check_depth(depth, options, path)?;

    match yaml {
        Yaml::Null | Yaml::BadValue | Yaml::Alias(_) => Ok(Value::Null),
        Yaml::Boolean(b) => Ok(Value::Bool(*b)),
        Yaml::Integer(i) => Ok(Value::Integer(*i)),
        Yaml::Real(text) => yaml
            .as_f64()
            .map(Value::Real)
            .ok_or_else(|| ConfigError::InvalidNumber {
                text: text.clone(),
                path: path.clone(),
            }),
        Yaml::String(s) => Ok(Value::String(s.clone())),
        Yaml::Array(items) => {
            let mut converted = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                path.push(index.to_string());
                let value = convert_yaml(item, options, depth + 1, path);
                path.pop();
                converted.push(value?);
            }
            Ok(Value::Sequence(converted))
        }
        Yaml::Hash(hash) => {
            let mut entries = IndexMap::with_capacity(hash.len());
            for (key, item) in hash {
                let Some(key) = yaml_key(key) else {
                    tracing::debug!(?key, path = %path.join("."), "Skipping non-scalar config key");
                    continue;
                };
                path.push(key.clone());
                let value = convert_yaml(item, options, depth + 1, path);
                path.pop();
                entries.insert(key, value?);
            }
            Ok(Value::from(entries))
        }
    }
}

fn convert_json(
    json: &serde_json::Value,
    options: &ConvertOptions,
    depth: usize,
    path: &mut Vec<String>,
) -> Result<Value, ConfigError> {
    check_depth(depth, options, path)?;

    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(Value::Integer)
            .or_else(|| n.as_f64().map(Value::Real))
            .ok_or_else(|| ConfigError::InvalidNumber {
                text: n.to_string(),
                path: path.clone(),
            }),
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Array(items) => {
            let mut converted = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                path.push(index.to_string());
                let value = convert_json(item, options, depth + 1, path);
                path.pop();
                converted.push(value?);
            }
            Ok(Value::Sequence(converted))
        }
        serde_json::Value::Object(object) => {
            let mut entries = IndexMap::with_capacity(object.len());
            for (key, item) in object {
                path.push(key.clone());
                let value = convert_json(item, options, depth + 1, path);
                path.pop();
                entries.insert(key.clone(), value?);
            }
            Ok(Value::from(entries))
        }
    }
}
