//! Field access for structurally inspecting decoded response payloads.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::usage::Usage;

pub fn object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::unrecognized_shape(format!("{what} is not an object")))
}

pub fn required<'a>(map: &'a Map<String, Value>, key: &str, what: &str) -> Result<&'a Value> {
    map.get(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| Error::unrecognized_shape(format!("{what} has no `{key}`")))
}

pub fn array<'a>(map: &'a Map<String, Value>, key: &str, what: &str) -> Result<&'a [Value]> {
    required(map, key, what)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::unrecognized_shape(format!("{what}.{key} is not an array")))
}

pub fn index(map: &Map<String, Value>, what: &str) -> Result<usize> {
    required(map, "index", what)?
        .as_u64()
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| Error::unrecognized_shape(format!("{what}.index is not an unsigned integer")))
}

/// Every item index must be distinct and address one of `count` inputs.
pub fn distinct_indices(
    indices: impl IntoIterator<Item = usize>,
    count: usize,
    what: &str,
) -> Result<()> {
    let mut seen = HashSet::with_capacity(count);
    for index in indices {
        if index >= count {
            return Err(Error::unrecognized_shape(format!(
                "{what} index {index} outside {count} inputs"
            )));
        }
        if !seen.insert(index) {
            return Err(Error::unrecognized_shape(format!(
                "{what} index {index} repeated"
            )));
        }
    }
    Ok(())
}

/// The `model` and `usage` envelope every operation returns.
pub fn envelope(map: &Map<String, Value>, what: &str) -> Result<(String, Usage)> {
    let model = required(map, "model", what)?
        .as_str()
        .ok_or_else(|| Error::unrecognized_shape(format!("{what}.model is not a string")))?
        .to_string();
    let usage = Usage::from_value(required(map, "usage", what)?)?;
    Ok((model, usage))
}
