//! The conversion pipeline
//!
//! read → convert → format → write, each stage gated on the one before.
//! The output file is only opened once the formatted bytes exist, so a
//! failing read, conversion or format never touches the destination.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::{debug, info_span};

use crate::convert::yaml_to_json;
use crate::core::{ConvertConfig, ConvertError, Result};
use crate::format::indent;

/// Runs one YAML to JSON conversion
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert the configured input file into the configured output file
    pub fn run(&self) -> Result<()> {
        let span = info_span!(
            "convert",
            input = %self.config.input_path.display(),
            output = %self.config.output_path.display()
        );
        let _enter = span.enter();

        let yaml = read_input(self.config.input_path())?;
        let pretty = self.convert_bytes(&yaml)?;
        write_output(self.config.output_path(), &pretty, self.config.file_mode)?;

        debug!("conversion finished");
        Ok(())
    }

    /// Convert YAML bytes to indented JSON bytes without touching the filesystem
    pub fn convert_bytes(&self, yaml: &[u8]) -> Result<Vec<u8>> {
        let compact = yaml_to_json(yaml)?;
        debug!(bytes = compact.len(), "converted YAML to compact JSON");

        let pretty = indent(&compact, &self.config.indent).map_err(ConvertError::format_error)?;
        debug!(bytes = pretty.len(), "formatted JSON");
        Ok(pretty)
    }
}

/// Convert `input` into `output` with the default indent and file mode
///
/// # Example
/// ```no_run
/// yaml2json::convert_file("input.yaml", "output.json").unwrap();
/// ```
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let config = ConvertConfig::new(input.as_ref(), output.as_ref());
    Converter::new(config).run()
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| ConvertError::read_error(path, e))?;
    debug!(bytes = bytes.len(), "read input");
    Ok(bytes)
}

fn write_output(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options
        .open(path)
        .map_err(|e| ConvertError::write_error(path, e))?;
    file.write_all(contents)
        .map_err(|e| ConvertError::write_error(path, e))?;

    debug!(bytes = contents.len(), "wrote output");
    Ok(())
}
