/*
 * cursor/fallback.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Fallback composition: a primary cursor whose gaps are filled by a
 * fallback cursor, recursively at every depth.
 */

//! The fallback composite.
//!
//! Nothing is cached: every answer is recomputed from the two sides, so a
//! composite over immutable cursors is itself immutable. Composites nest,
//! giving an ordered chain of layers:
//!
//! ```text
//! (document ⊳ directory) ⊳ project
//! ```

use super::Cursor;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct FallbackCursor {
    primary: Cursor,
    fallback: Cursor,
}

impl FallbackCursor {
    pub fn new(primary: Cursor, fallback: Cursor) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &Cursor {
        &self.primary
    }

    pub fn fallback(&self) -> &Cursor {
        &self.fallback
    }

    /// First present value wins. An explicit null is present, so it is
    /// returned rather than falling through.
    pub fn value(&self) -> Option<&Value> {
        self.primary.value().or_else(|| self.fallback.value())
    }

    /// Undefined only when both sides are.
    pub fn is_undefined(&self) -> bool {
        self.primary.is_undefined() && self.fallback.is_undefined()
    }

    /// Null when the primary is null, or when the fallback is both undefined
    /// and null. A null fallback under a defined primary does not count.
    pub fn is_null(&self) -> bool {
        self.primary.is_null() || (self.fallback.is_undefined() && self.fallback.is_null())
    }

    /// Descend both sides. If the primary has nothing at `key` the fallback's
    /// child is the answer; otherwise the two children are composed again so
    /// deeper gaps keep being filled.
    pub fn at_key(&self, key: &str) -> Cursor {
        let primary = self.primary.at_key(key);
        let fallback = self.fallback.at_key(key);
        if primary.is_undefined() {
            tracing::trace!(key, "primary undefined, resolving from fallback");
            fallback
        } else {
            primary.with_fallback(fallback)
        }
    }

    /// Transform both sides, keeping the composite.
    pub fn transform(&self, f: &dyn Fn(&str) -> String) -> Cursor {
        self.primary
            .transform_with(f)
            .with_fallback(self.fallback.transform_with(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> Value {
        Value::from(s)
    }

    fn map(entries: Vec<(&str, Value)>) -> Cursor {
        Cursor::new(Value::map(entries))
    }

    fn raw_map(entries: Vec<(&str, Value)>) -> Value {
        Value::map(entries)
    }

    #[test]
    fn test_primary_takes_precedence() {
        let primary = map(vec![("a", Value::from(1))]);
        let fallback = map(vec![("a", Value::from(2)), ("b", Value::from(3))]);
        let config = primary.with_fallback(fallback);

        assert_eq!(config.at_key("a").value(), Some(&Value::from(1)));
        assert_eq!(config.at_key("b").value(), Some(&Value::from(3)));
    }

    #[test]
    fn test_nested_gaps_filled_at_depth() {
        let primary = map(vec![("x", raw_map(vec![("a", Value::from(1))]))]);
        let fallback = map(vec![("x", raw_map(vec![("b", Value::from(2))]))]);
        let config = primary.with_fallback(fallback);

        let x = config.at_key("x");
        assert!(matches!(x, Cursor::Fallback(_)));
        assert_eq!(x.at_key("a").value(), Some(&Value::from(1)));
        assert_eq!(x.at_key("b").value(), Some(&Value::from(2)));
        assert!(x.at_key("c").is_undefined());
    }

    #[test]
    fn test_undefined_only_when_both_sides_undefined() {
        let primary = map(vec![("p", scalar("1"))]);
        let fallback = map(vec![("f", scalar("2"))]);
        let config = primary.with_fallback(fallback);

        assert!(!config.at_key("p").is_undefined());
        assert!(!config.at_key("f").is_undefined());
        assert!(config.at_key("z").is_undefined());

        let both_undefined = Cursor::undefined().with_fallback(Cursor::undefined());
        assert!(both_undefined.is_undefined());
        assert_eq!(both_undefined.value(), None);
    }

    #[test]
    fn test_primary_missing_yields_fallback_child_directly() {
        let primary = map(vec![]);
        let fallback = map(vec![("a", scalar("from fallback"))]);
        let config = primary.with_fallback(fallback);

        assert_eq!(config.at_key("a"), Cursor::primitive(scalar("from fallback")));
    }

    #[test]
    fn test_explicit_null_in_primary_does_not_fall_through() {
        let primary = map(vec![("a", Value::Null)]);
        let fallback = map(vec![("a", scalar("fallback"))]);
        let a = primary.with_fallback(fallback).at_key("a");

        assert!(a.is_null());
        assert!(!a.is_undefined());
        assert_eq!(a.value(), Some(&Value::Null));
    }

    #[test]
    fn test_null_in_fallback_only_when_primary_missing() {
        let primary = map(vec![]);
        let fallback = map(vec![("a", Value::Null)]);
        let a = primary.with_fallback(fallback).at_key("a");

        assert!(a.is_null());
        assert!(!a.is_undefined());
    }

    // The null rule is asymmetric: a defined-but-null fallback does not make
    // the composite null. Keep this behaviour; the symmetric rule
    // `primary.is_null() || fallback.is_null()` would change layering results.
    #[test]
    fn test_is_null_asymmetric_rule() {
        let null = Cursor::primitive(Value::Null);

        let over_undefined = Cursor::undefined().with_fallback(null.clone());
        assert!(!over_undefined.is_null());
        assert!(!over_undefined.is_undefined());
        assert_eq!(over_undefined.value(), Some(&Value::Null));

        let over_value = Cursor::primitive(scalar("set")).with_fallback(null.clone());
        assert!(!over_value.is_null());

        let null_over_value = null.with_fallback(Cursor::primitive(scalar("set")));
        assert!(null_over_value.is_null());

        let null_over_undefined = Cursor::primitive(Value::Null).with_fallback(Cursor::undefined());
        assert!(null_over_undefined.is_null());
    }

    #[test]
    fn test_value_prefers_primary_map() {
        let primary = map(vec![("a", scalar("1"))]);
        let fallback = map(vec![("b", scalar("2"))]);
        let config = primary.clone().with_fallback(fallback);

        assert_eq!(config.value(), primary.value());
    }

    #[test]
    fn test_transform_distributes() {
        let primary = map(vec![("a", scalar("p"))]);
        let fallback = map(vec![("a", scalar("f")), ("b", scalar("g"))]);
        let config = primary.with_fallback(fallback);

        let transformed = config.transform(|s| format!("<{s}>"));
        assert!(matches!(transformed, Cursor::Fallback(_)));
        assert_eq!(transformed.at_key("a").value(), Some(&scalar("<p>")));
        assert_eq!(transformed.at_key("b").value(), Some(&scalar("<g>")));

        // original untouched
        assert_eq!(config.at_key("a").value(), Some(&scalar("p")));
    }

    #[test]
    fn test_three_layer_chain() {
        let top = map(vec![("server", raw_map(vec![("port", Value::from(8080))]))]);
        let middle = map(vec![("server", raw_map(vec![("host", scalar("0.0.0.0"))]))]);
        let bottom = map(vec![(
            "server",
            raw_map(vec![
                ("host", scalar("127.0.0.1")),
                ("port", Value::from(80)),
                ("workers", Value::from(4)),
            ]),
        )]);

        let config = top.with_fallback(middle).with_fallback(bottom);
        let server = config.at_key("server");

        assert_eq!(server.at_key("port").value(), Some(&Value::from(8080)));
        assert_eq!(server.at_key("host").value(), Some(&scalar("0.0.0.0")));
        assert_eq!(server.at_key("workers").value(), Some(&Value::from(4)));
        assert_eq!(server.keys(), vec!["port", "host", "workers"]);
    }

    #[test]
    fn test_primitive_over_map_hides_nothing_below() {
        // primary's "light" is undefined, so the fallback answers
        let primary = map(vec![("theme", scalar("cosmo"))]);
        let fallback = map(vec![("theme", raw_map(vec![("light", scalar("flatly"))]))]);
        let theme = primary.with_fallback(fallback).at_key("theme");

        assert_eq!(theme.value(), Some(&scalar("cosmo")));
        assert_eq!(theme.at_key("light").value(), Some(&scalar("flatly")));
    }
}
