//! yaml2json - Convert YAML documents into pretty-printed JSON
//!
//! The pipeline reads a YAML file, converts it to JSON with object keys in
//! lexicographic order, indents it with two spaces and writes the result.
//!
//! # Quick Start
//!
//! ```rust
//! use yaml2json::to_json_string;
//!
//! let json = to_json_string("name: Alice\nage: 30\n").unwrap();
//! assert_eq!(json, "{\n  \"age\": 30,\n  \"name\": \"Alice\"\n}");
//! ```
//!
//! # Files
//!
//! ```no_run
//! use yaml2json::{ConvertConfig, Converter};
//!
//! let converter = Converter::new(ConvertConfig::new("config.yaml", "config.json"));
//! converter.run().unwrap();
//! ```

pub mod convert;
pub mod core;
pub mod format;
pub mod pipeline;

pub use crate::core::*;
pub use pipeline::{convert_file, Converter};

/// Convert a YAML string to an indented JSON string using the default indent
pub fn to_json_string(yaml: &str) -> Result<String> {
    let bytes = Converter::default().convert_bytes(yaml.as_bytes())?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
