//! Convert command implementation

use crate::cli::error::CliError;
use crate::convert::{ConvertOptions, convert_file};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Constellation file to rewrite in place
    pub input: PathBuf,
    pub keep_declination: bool,
    pub pretty: bool,
    /// Print the converted document instead of writing it
    pub dry_run: bool,
}

impl ConvertArgs {
    /// Arguments for a plain in-place conversion of `input`
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            keep_declination: false,
            pretty: false,
            dry_run: false,
        }
    }

    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            keep_declination: self.keep_declination,
            pretty: self.pretty,
            dry_run: self.dry_run,
        }
    }
}

/// Handle the convert command
pub fn handle_convert(args: &ConvertArgs) -> Result<(), CliError> {
    handle_convert_to(args, &mut std::io::stdout())
}

/// Handle the convert command, sending dry-run output to `out`
pub fn handle_convert_to<W: Write>(args: &ConvertArgs, out: &mut W) -> Result<(), CliError> {
    let report = convert_file(&args.input, &args.options())?;

    if !report.written {
        writeln!(out, "{}", report.content).map_err(|e| CliError::OutputError(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConversionError;

    #[test]
    fn test_handle_convert_missing_file() {
        let args = ConvertArgs::new("/nonexistent/constellation.json");
        let result = handle_convert_to(&args, &mut Vec::<u8>::new());
        assert!(matches!(
            result,
            Err(CliError::ConversionError(ConversionError::NotFound(_)))
        ));
    }
}
