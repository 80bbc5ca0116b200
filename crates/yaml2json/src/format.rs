//! JSON pretty-printing
//!
//! Re-serializes compact JSON with one indent unit per nesting level,
//! each object or array entry on its own line and `": "` between keys and
//! values. Scalars are emitted bare and no trailing newline is added.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Indent compact JSON bytes
///
/// # Example
/// ```rust
/// use yaml2json::format::indent;
///
/// let pretty = indent(br#"{"a":[1,2]}"#, "  ").unwrap();
/// assert_eq!(pretty, b"{\n  \"a\": [\n    1,\n    2\n  ]\n}");
/// ```
pub fn indent(compact: &[u8], indent: &str) -> Result<Vec<u8>, serde_json::Error> {
    let value: Value = serde_json::from_slice(compact)?;
    to_pretty(&value, indent)
}

/// Serialize a JSON value with the given indent
pub fn to_pretty(value: &Value, indent: &str) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}
