//! YAML to JSON conversion
//!
//! Parses a YAML document with `serde_yaml` and maps it onto a
//! `serde_json::Value`. Object keys come out in lexicographic order at every
//! nesting level; sequence order is preserved.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use tracing::{debug, trace};

use crate::core::ValueError;

/// Parse YAML bytes into a JSON value
///
/// Only the first document of a multi-document stream is used. A stream
/// without any document (empty input, comments only) converts to `null`.
/// Merge keys (`<<: *anchor`) are expanded, with local keys taking
/// precedence over merged ones.
///
/// # Example
/// ```rust
/// use yaml2json::convert::yaml_to_value;
///
/// let value = yaml_to_value(b"b: 1\na: [x, y]\n").unwrap();
/// assert_eq!(value.to_string(), r#"{"a":["x","y"],"b":1}"#);
/// ```
pub fn yaml_to_value(input: &[u8]) -> Result<JsonValue, ValueError> {
    let mut document = match serde_yaml::Deserializer::from_slice(input).next() {
        Some(document) => YamlValue::deserialize(document)?,
        None => {
            trace!("input contains no YAML document");
            YamlValue::Null
        }
    };

    document.apply_merge()?;

    let value = to_json(document)?;
    debug!(kind = kind_of(&value), "converted YAML document");
    Ok(value)
}

/// Convert YAML bytes into compact JSON bytes
pub fn yaml_to_json(input: &[u8]) -> Result<Vec<u8>, ValueError> {
    let value = yaml_to_value(input)?;
    Ok(serde_json::to_vec(&value)?)
}

fn to_json(value: YamlValue) -> Result<JsonValue, ValueError> {
    Ok(match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => JsonValue::Number(number_to_json(&n)?),
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            // Later duplicates of a stringified key replace earlier ones
            let mut entries = BTreeMap::new();
            for (key, value) in mapping {
                entries.insert(key_to_string(key)?, to_json(value)?);
            }
            JsonValue::Object(entries.into_iter().collect::<Map<_, _>>())
        }
        YamlValue::Tagged(tagged) => to_json(tagged.value)?,
    })
}

fn number_to_json(n: &serde_yaml::Number) -> Result<Number, ValueError> {
    if let Some(u) = n.as_u64() {
        return Ok(Number::from(u));
    }
    if let Some(i) = n.as_i64() {
        return Ok(Number::from(i));
    }
    let f = n.as_f64().unwrap_or(f64::NAN);
    Number::from_f64(f).ok_or(ValueError::NonFiniteFloat { value: f })
}

fn key_to_string(key: YamlValue) -> Result<String, ValueError> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        YamlValue::Sequence(_) => Err(ValueError::UnsupportedKey { kind: "sequence" }),
        YamlValue::Mapping(_) => Err(ValueError::UnsupportedKey { kind: "mapping" }),
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
