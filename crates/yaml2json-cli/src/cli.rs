//! Command-line application
//!
//! No flags or arguments are read: the tool always converts `input.yaml`
//! into `output.json` in the current working directory.

use tracing::debug;
use yaml2json::{ConvertConfig, ConvertError, Converter};

/// Main CLI application
pub struct Yaml2JsonApp {
    converter: Converter,
}

impl Yaml2JsonApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(ConvertConfig::default())
    }

    pub fn with_config(config: ConvertConfig) -> Self {
        Self {
            converter: Converter::new(config),
        }
    }

    /// Run the conversion and return the status line to print on success
    ///
    /// The error's `Display` form already carries the failing stage, so the
    /// caller prints it as `Error <action>: <cause>`.
    pub fn run(&self) -> Result<String, ConvertError> {
        let config = self.converter.config();
        debug!(version = env!("CARGO_PKG_VERSION"), "starting yaml2json");

        self.converter.run()?;

        Ok(format!(
            "Converted {} to {}",
            config.input_path().display(),
            config.output_path().display()
        ))
    }
}

impl Default for Yaml2JsonApp {
    fn default() -> Self {
        Self::new()
    }
}
