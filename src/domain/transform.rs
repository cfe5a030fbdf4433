//! Reshapes an upstream payload into canonical user records.

use serde_json::Value;

use super::user::{CanonicalUserRecord, ResultCount};
use crate::errors::{AppError, AppResult};

/// Parse an upstream body and map its `results` array to canonical records.
///
/// At most `expected` elements are used, in upstream order. A missing
/// `results` key counts as an empty array. A body that is not a JSON object,
/// or a `results` value that is present but not an array (including falsy
/// values such as `{}`, `""`, `false` or `0`), is a malformed payload rather
/// than "no data".
pub fn transform(body: &str, expected: ResultCount) -> AppResult<Vec<CanonicalUserRecord>> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| AppError::malformed(format!("invalid JSON payload: {}", e)))?;
    let payload = payload
        .as_object()
        .ok_or_else(|| AppError::malformed("upstream payload is not a JSON object"))?;

    let results = match payload.get("results") {
        None | Some(Value::Null) => return Err(AppError::NoUserData),
        Some(Value::Array(items)) if items.is_empty() => return Err(AppError::NoUserData),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(AppError::malformed("`results` is not an array")),
    };

    results
        .iter()
        .take(expected.get() as usize)
        .enumerate()
        .map(|(index, element)| to_canonical(index, element))
        .collect()
}

fn to_canonical(index: usize, element: &Value) -> AppResult<CanonicalUserRecord> {
    let at = |path: &str| format!("results[{}].{}", index, path);

    let first = string_at(element, &["name", "first"]).ok_or_else(|| missing(at("name.first")))?;
    let last = string_at(element, &["name", "last"]).ok_or_else(|| missing(at("name.last")))?;
    let email = string_at(element, &["email"]).ok_or_else(|| missing(at("email")))?;
    let age = match lookup(element, &["dob", "age"]) {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => return Err(missing(at("dob.age"))),
    };

    Ok(CanonicalUserRecord::new(format!("{} {}", first, last), email, age))
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

fn string_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path).and_then(Value::as_str)
}

fn missing(path: String) -> AppError {
    AppError::malformed(format!("missing or invalid field `{}`", path))
}
