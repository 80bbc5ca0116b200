//! Conversion settings
//!
//! The command-line tool always runs with [`ConvertConfig::default`]; the
//! library exposes the paths, indent and file mode so they can be overridden.

use std::path::{Path, PathBuf};

/// Default input path, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "input.yaml";

/// Default output path, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// Default indent per nesting level
pub const DEFAULT_INDENT: &str = "  ";

/// Default permission bits for a newly created output file (rw-r--r--)
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub indent: String,
    pub file_mode: u32,
}

impl ConvertConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Permission bits applied when the output file is created (Unix only)
    pub fn with_file_mode(mut self, file_mode: u32) -> Self {
        self.file_mode = file_mode;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            indent: DEFAULT_INDENT.to_string(),
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();
        assert_eq!(config.input_path(), Path::new("input.yaml"));
        assert_eq!(config.output_path(), Path::new("output.json"));
        assert_eq!(config.indent, "  ");
        assert_eq!(config.file_mode, 0o644);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConvertConfig::new("a.yml", "b.json")
            .with_indent("\t")
            .with_file_mode(0o600);
        assert_eq!(config.input_path(), Path::new("a.yml"));
        assert_eq!(config.output_path(), Path::new("b.json"));
        assert_eq!(config.indent, "\t");
        assert_eq!(config.file_mode, 0o600);
    }
}
