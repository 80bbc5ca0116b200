//! Error types for the conversion pipeline
//!
//! Every stage of the pipeline has its own error variant so callers can tell
//! a missing input file apart from malformed YAML or an unwritable output.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Conversion,
    Format,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read => "read",
            Stage::Conversion => "conversion",
            Stage::Format => "format",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

/// Why a YAML document could not be turned into JSON
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported mapping key: {kind} keys cannot be represented in JSON")]
    UnsupportedKey { kind: &'static str },

    #[error("unsupported value: {value} cannot be represented in JSON")]
    NonFiniteFloat { value: f64 },

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned by the conversion pipeline
///
/// The `Display` form is `<action>: <cause>`, e.g.
/// `reading input.yaml: No such file or directory (os error 2)`.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("converting YAML to JSON: {source}")]
    Conversion {
        #[from]
        source: ValueError,
    },

    #[error("formatting JSON: {source}")]
    Format {
        #[source]
        source: serde_json::Error,
    },

    #[error("writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Create a new read error
    pub fn read_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new format error
    pub fn format_error(source: serde_json::Error) -> Self {
        Self::Format { source }
    }

    /// Create a new write error
    pub fn write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// The stage that failed
    pub fn stage(&self) -> Stage {
        match self {
            Self::Read { .. } => Stage::Read,
            Self::Conversion { .. } => Stage::Conversion,
            Self::Format { .. } => Stage::Format,
            Self::Write { .. } => Stage::Write,
        }
    }

    /// Stage-identifying prefix, e.g. `reading input.yaml`
    pub fn action(&self) -> String {
        match self {
            Self::Read { path, .. } => format!("reading {}", path.display()),
            Self::Conversion { .. } => "converting YAML to JSON".to_string(),
            Self::Format { .. } => "formatting JSON".to_string(),
            Self::Write { path, .. } => format!("writing {}", path.display()),
        }
    }
}

/// Result alias for pipeline operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ConvertError::read_error("input.yaml", io_err);
        assert_eq!(error.stage(), Stage::Read);
        assert_eq!(error.action(), "reading input.yaml");
        assert_eq!(error.to_string(), "reading input.yaml: File not found");
    }

    #[test]
    fn test_write_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error = ConvertError::write_error("output.json", io_err);
        assert_eq!(error.stage(), Stage::Write);
        assert!(error.to_string().starts_with("writing output.json: "));
        assert!(error.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_conversion_error_from_value_error() {
        let error: ConvertError = ValueError::UnsupportedKey { kind: "sequence" }.into();
        assert_eq!(error.stage(), Stage::Conversion);
        let msg = error.to_string();
        assert!(msg.starts_with("converting YAML to JSON: "));
        assert!(msg.contains("sequence keys"));
    }

    #[test]
    fn test_format_error() {
        let json_err = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let error = ConvertError::format_error(json_err);
        assert_eq!(error.stage(), Stage::Format);
        assert!(error.to_string().starts_with("formatting JSON: "));
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Read.to_string(), "read");
        assert_eq!(Stage::Write.to_string(), "write");
    }
}
