/*
 * interpolate.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * `${NAME}` substitution for use with `Cursor::transform`.
 */

//! Variable interpolation in string leaves.
//!
//! Tokens have the form `${NAME}` or `${NAME:-default}`. A token whose name
//! resolves is replaced by its value; otherwise the default is used if one is
//! given, and the token is left verbatim if not.
//!
//! ```rust
//! use config_cursor::{Cursor, Value, interpolate};
//!
//! let config = Cursor::new(Value::map([("url", Value::from("http://${HOST:-localhost}/"))]));
//! let resolved = config.transform(|s| interpolate::substitute(s, |_| None));
//! assert_eq!(resolved.at_key("url").value(), Some(&Value::from("http://localhost/")));
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("token pattern is valid"));

/// Replace every `${NAME}` token in `input` using `lookup`.
pub fn substitute<L>(input: &str, lookup: L) -> String
where
    L: Fn(&str) -> Option<String>,
{
    TOKEN
        .replace_all(input, |caps: &Captures<'_>| {
            let name = caps[1].trim();
            match (lookup(name), caps.get(2)) {
                (Some(value), _) => value,
                (None, Some(default)) => default.as_str().to_string(),
                (None, None) => {
                    tracing::trace!(name, "Unresolved interpolation token left as is");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// A rewrite function that resolves tokens from process environment variables.
pub fn env_interpolator() -> impl Fn(&str) -> String {
    |input: &str| substitute(input, |name| std::env::var(name).ok())
}
