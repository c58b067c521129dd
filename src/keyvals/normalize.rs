//! Normalization of raw key-value lists into pairs

use super::Value;
use crate::config::{EMPTY_VALUE, MISSING_KEY, NON_STRING_KEY};

/// Split a raw alternating list into `(key, value)` pairs.
///
/// Values are left unresolved. An odd trailing element becomes the value of
/// [`MISSING_KEY`].
pub(crate) fn pairs(raw: &[Value]) -> impl Iterator<Item = (String, Value)> + '_ {
    let chunks = raw.chunks_exact(2);
    let orphan = chunks
        .remainder()
        .first()
        .map(|value| (MISSING_KEY.to_owned(), value.clone()));

    chunks
        .map(|pair| (key_name(&pair[0]), pair[1].clone()))
        .chain(orphan)
}

/// Resolve lazies and replace empty strings with [`EMPTY_VALUE`].
pub(crate) fn resolve(value: Value) -> Value {
    match value.resolve() {
        Value::Str(s) if s.is_empty() => Value::Str(EMPTY_VALUE.to_owned()),
        resolved => resolved,
    }
}

fn key_name(key: &Value) -> String {
    match key {
        Value::Str(s) => s.clone(),
        _ => NON_STRING_KEY.to_owned(),
    }
}
