//! # Placeholders
//!
//! Clip content may carry placeholders of the form `{{ name }}` or
//! `{{ name = default }}`. Spaces around the name, the `=` and the default are
//! optional, so `{{name=5}}` and `{{ name = 5 }}` are the same placeholder.
//! Names and defaults are restricted to `[A-Za-z0-9_]`.
//!
//! This module owns the three text-level operations on placeholders:
//!
//! - [`find_variables`]: discover the placeholders in a body of content
//! - [`parse_variables`] / [`format_variables`]: the `k1=v1,k2=v2` string form
//!   used both by the on-disk variables blob and by user overrides
//! - [`substitute`]: render content by replacing placeholders with values

use crate::error::{ClipError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::ops::Range;

/// Mapping of variable name to its bound (or default) value.
pub type Variables = BTreeMap<String, String>;

static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{ *([A-Za-z0-9_]+) *=? *([A-Za-z0-9_]*)? *\}\}")
        .expect("placeholder pattern must compile")
});

/// Scans `content` for placeholders and returns each name with its default.
///
/// Duplicate names are resolved by sorting all matches on their default value
/// and inserting in that order, so the default that sorts last wins. A
/// placeholder without a default contributes the empty string.
pub fn find_variables(content: &[u8]) -> Result<Variables> {
    let text = String::from_utf8(content.to_vec())?;

    let mut matches: Vec<(String, String)> = VARIABLE_PATTERN
        .captures_iter(&text)
        .map(|caps| {
            let name = caps.get(1).map_or("", |m| m.as_str()).to_string();
            let default = caps.get(2).map_or("", |m| m.as_str()).to_string();
            (name, default)
        })
        .collect();

    // Stable sort: equal defaults keep their order of appearance
    matches.sort_by(|a, b| a.1.cmp(&b.1));

    Ok(matches.into_iter().collect())
}

/// Parses a `k1=v1,k2=v2` string. Every comma-separated token must split on
/// `=` into exactly two parts; `k=` binds an empty value.
pub fn parse_variables(body: &str) -> Result<Variables> {
    body.split(',')
        .map(|token| {
            let parts: Vec<&str> = token.split('=').collect();
            match parts.as_slice() {
                [key, value] => Ok((key.to_string(), value.to_string())),
                _ => Err(ClipError::MalformedVariableString(token.to_string())),
            }
        })
        .collect()
}

/// Inverse of [`parse_variables`], in the mapping's iteration order.
pub fn format_variables(vars: &Variables) -> String {
    vars.iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Replaces placeholders in `text` until none remain.
///
/// Each pass substitutes the earliest placeholder and then rescans from the
/// start of the updated text, so a value that itself contains a placeholder
/// is substituted again. Fails if a placeholder name has no entry in `vars`.
pub fn substitute(text: String, vars: &Variables) -> Result<String> {
    let mut text = text;
    let mut replaced = 0usize;

    while let Some((span, name)) = first_placeholder(&text) {
        let value = vars
            .get(&name)
            .ok_or(ClipError::MissingVariableBinding(name))?;
        text.replace_range(span, value);
        replaced += 1;
    }

    tracing::debug!(replaced, "substituted placeholders");
    Ok(text)
}

fn first_placeholder(text: &str) -> Option<(Range<usize>, String)> {
    let caps = VARIABLE_PATTERN.captures(text)?;
    let whole = caps.get(0)?;
    let name = caps.get(1)?;
    Some((whole.range(), name.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Variables {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_find_variables() {
        let found = find_variables(b"{{ var1 }} {{ var2 = 5 }}").unwrap();
        assert_eq!(found, vars(&[("var1", ""), ("var2", "5")]));
    }

    #[test]
    fn test_find_variables_no_spaces() {
        let found = find_variables(b"{{var1}} {{var2=5}}").unwrap();
        assert_eq!(found, vars(&[("var1", ""), ("var2", "5")]));
    }

    #[test]
    fn test_find_variables_none() {
        let found = find_variables(b"plain text { not } {{ }}").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_find_variables_duplicate_keeps_last_sorted_default() {
        // "zeta" sorts after "alpha" regardless of where it appears
        let found = find_variables(b"{{ x = zeta }} {{ x = alpha }}").unwrap();
        assert_eq!(found, vars(&[("x", "zeta")]));

        let found = find_variables(b"{{ x = alpha }} {{ x }}").unwrap();
        assert_eq!(found, vars(&[("x", "alpha")]));
    }

    #[test]
    fn test_find_variables_rejects_invalid_utf8() {
        let err = find_variables(&[0xff, 0xfe, b'{']).unwrap_err();
        assert!(matches!(err, ClipError::Utf8(_)));
    }

    #[test]
    fn test_parse_variables() {
        let parsed = parse_variables("var1=,var2=5").unwrap();
        assert_eq!(parsed, vars(&[("var1", ""), ("var2", "5")]));
    }

    #[test]
    fn test_parse_variables_keeps_spaces_in_values() {
        let parsed = parse_variables("msg=Hello world!").unwrap();
        assert_eq!(parsed, vars(&[("msg", "Hello world!")]));
    }

    #[test]
    fn test_parse_variables_missing_equals() {
        let err = parse_variables("var1=1,var2").unwrap_err();
        match err {
            ClipError::MalformedVariableString(token) => assert_eq!(token, "var2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_variables_multiple_equals() {
        let err = parse_variables("a=b=c").unwrap_err();
        assert!(matches!(err, ClipError::MalformedVariableString(_)));
    }

    #[test]
    fn test_parse_variables_empty_body() {
        assert!(parse_variables("").is_err());
    }

    #[test]
    fn test_format_variables() {
        let formatted = format_variables(&vars(&[("str", "qwerty"), ("msg", "")]));
        assert_eq!(formatted, "msg=,str=qwerty");
        assert_eq!(format_variables(&Variables::new()), "");
    }

    #[test]
    fn test_substitute() {
        let text = "print('{{ msg }}')\nsorted('{{ str = qwerty }}')\n".to_string();
        let out = substitute(text, &vars(&[("msg", "Hello world!"), ("str", "qwerty")])).unwrap();
        assert_eq!(out, "print('Hello world!')\nsorted('qwerty')\n");
    }

    #[test]
    fn test_substitute_rescans_replaced_values() {
        let text = "<{{ outer }}>".to_string();
        let out = substitute(text, &vars(&[("outer", "{{ inner }}!"), ("inner", "x")])).unwrap();
        assert_eq!(out, "<x!>");
    }

    #[test]
    fn test_substitute_missing_binding() {
        let err = substitute("{{ a }} {{ b }}".to_string(), &vars(&[("a", "1")])).unwrap_err();
        match err {
            ClipError::MissingVariableBinding(name) => assert_eq!(name, "b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
