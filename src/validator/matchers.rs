//! Set-membership primitives shared by every rule check.
//!
//! Both matchers accept a scalar or a list as the candidate. A scalar is
//! treated as a one-element list. The two differ in quantifier:
//! [`value_in_set`] requires every element to be a member, while
//! [`pattern_value_in_set`] requires some element to match some pattern.

use regex::Regex;
use serde_json::Value;

use super::errors::ValidationError;

/// True when every candidate element appears verbatim in `set`.
///
/// On failure appends a single [`ValidationError`] naming the set. An empty
/// list candidate passes vacuously; a candidate with no text form (null,
/// object, nested list) fails.
pub fn value_in_set<S: AsRef<str>>(
    value: &Value,
    set: &[S],
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> bool {
    let all_present = elements(value).into_iter().all(|item| {
        scalar_text(item).map_or(false, |text| set.iter().any(|code| text == code.as_ref()))
    });
    if !all_present {
        errors.push(ValidationError::not_in_set(set, field));
        return false;
    }
    true
}

/// True when some candidate element matches some pattern in `patterns`.
///
/// Patterns are regular expressions searched unanchored, so `CAL` matches
/// the value `CAL F`. An empty list candidate fails; so does a pattern that
/// does not compile.
pub fn pattern_value_in_set<S: AsRef<str>>(
    value: &Value,
    patterns: &[S],
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> bool {
    let any_match = elements(value).into_iter().any(|item| {
        scalar_text(item).map_or(false, |text| {
            patterns
                .iter()
                .any(|pattern| pattern_matches(pattern.as_ref(), &text))
        })
    });
    if !any_match {
        errors.push(ValidationError::not_in_set(patterns, field));
        return false;
    }
    true
}

fn pattern_matches(pattern: &str, text: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

fn elements(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Canonical text of a scalar: strings as-is, numbers in decimal, booleans
/// as `true`/`false`. Null and structured values have no text form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Emptiness used by every "must be absent" rule: null, `false`, numeric
/// zero, `""` and `[]` are empty. Objects count as populated, even `{}`.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}
