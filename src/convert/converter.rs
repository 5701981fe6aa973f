//! Constellation format converter
//!
//! Converts legacy starfetch constellations into the renderer layout and
//! rewrites constellation files in place.

use std::fs;
use std::io;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::export::{ConstellationExporter, ExportError};
use crate::import::{ImportError, LegacyImporter};
use crate::models::{
    Constellation, LINE_COUNT, LegacyConstellation, LegacyGraph, Star, line_key,
};

/// Error during format conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read file {0}: {1}")]
    ReadError(PathBuf, String),
    #[error("Failed to write file {0}: {1}")]
    WriteError(PathBuf, String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Schema error: {0}")]
    SchemaError(String),
    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}

impl From<ImportError> for ConversionError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::ParseError(msg) => ConversionError::ParseError(msg),
            ImportError::SchemaError(msg) => ConversionError::SchemaError(msg),
        }
    }
}

/// Options controlling a conversion
///
/// The default produces exactly the renderer layout, written compactly.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Carry `declination` into the output
    pub keep_declination: bool,
    /// Indent the written JSON
    pub pretty: bool,
    /// Convert without writing the file back
    pub dry_run: bool,
}

/// Summary of a file conversion
#[derive(Debug, Clone)]
#[must_use = "conversion reports carry the converted content"]
pub struct ConversionReport {
    /// File that was converted
    pub path: PathBuf,
    /// Number of stars in the converted graph
    pub stars: usize,
    /// Whether the file was overwritten (false for dry runs)
    pub written: bool,
    /// Serialized constellation
    pub content: String,
}

/// Parse a graph column key into a 0-based column
///
/// Keys must fit in an `i64`.
fn parse_column(line: usize, key: &str) -> Result<i64, ConversionError> {
    let out_of_range = || {
        ConversionError::SchemaError(format!(
            "graph.{} column key '{}' is out of range",
            line_key(line),
            key
        ))
    };

    let col = key.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => ConversionError::SchemaError(format!(
            "graph.{} has non-integer column key '{}'",
            line_key(line),
            key
        )),
    })?;
    col.checked_sub(1).ok_or_else(out_of_range)
}

/// Flatten a legacy graph into `[col, row, value]` stars
///
/// Lines are visited from `line1` to `line10`, each line's entries in
/// document order. `row` is the 0-based line index and `col` the 0-based
/// column, so every entry of the source maps to exactly one star.
pub fn flatten_graph(graph: &LegacyGraph) -> Result<Vec<Star>, ConversionError> {
    let mut stars = Vec::new();

    for line in 1..=LINE_COUNT {
        let entries = graph
            .line(line)
            .ok_or_else(|| {
                ConversionError::SchemaError(format!("missing field `graph.{}`", line_key(line)))
            })?
            .as_object()
            .ok_or_else(|| {
                ConversionError::SchemaError(format!("graph.{} must be an object", line_key(line)))
            })?;

        let row = (line - 1) as u32;
        for (key, value) in entries {
            let col = parse_column(line, key)?;
            stars.push(Star(col, row, value.clone()));
        }
    }

    Ok(stars)
}

/// Convert a legacy constellation into the renderer layout
///
/// `declination` is dropped unless `options.keep_declination` is set.
pub fn convert_constellation(
    legacy: LegacyConstellation,
    options: &ConvertOptions,
) -> Result<Constellation, ConversionError> {
    let graph = flatten_graph(&legacy.graph)?;
    debug!(
        "Flattened graph of '{}' into {} stars",
        legacy.name,
        graph.len()
    );

    Ok(Constellation {
        title: legacy.title,
        graph,
        name: legacy.name,
        quadrant: legacy.quadrant,
        right_ascension: legacy.right_ascension,
        declination: options.keep_declination.then_some(legacy.declination),
        area: legacy.area,
        main_stars: legacy.main_stars,
    })
}

/// Convert legacy constellation JSON into renderer JSON
///
/// # Example
///
/// ```rust
/// use starfetch_convert::convert::{ConvertOptions, convert_str};
///
/// let legacy = r#"{"title":"T","name":"N","quadrant":1,"right ascension":12.5,
///   "declination":-3.2,"area":100,"main stars":2,"graph":{"line1":{"1":"a"},
///   "line2":{},"line3":{},"line4":{},"line5":{},"line6":{},"line7":{},
///   "line8":{},"line9":{},"line10":{}}}"#;
/// let converted = convert_str(legacy, &ConvertOptions::default()).unwrap();
/// assert_eq!(
///     converted,
///     r#"{"title":"T","graph":[[0,0,"a"]],"name":"N","quadrant":1,"right_ascension":12.5,"area":100,"main_stars":2}"#
/// );
/// ```
pub fn convert_str(
    json_content: &str,
    options: &ConvertOptions,
) -> Result<String, ConversionError> {
    let legacy = LegacyImporter::new().import(json_content)?;
    let constellation = convert_constellation(legacy, options)?;
    Ok(exporter_for(options).export(&constellation)?)
}

/// Convert the constellation file at `path` in place
///
/// The file is only overwritten once the whole conversion has succeeded;
/// on any error it is left as it was read.
pub fn convert<P: AsRef<Path>>(path: P) -> Result<(), ConversionError> {
    let _report = convert_file(path, &ConvertOptions::default())?;
    Ok(())
}

/// Convert the constellation file at `path` in place with the given options
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConversionError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConversionError::NotFound(path.to_path_buf()),
        _ => ConversionError::ReadError(path.to_path_buf(), e.to_string()),
    })?;
    debug!("Read {} bytes from {}", json_content.len(), path.display());

    let legacy = LegacyImporter::new().import(&json_content)?;
    let constellation = convert_constellation(legacy, options)?;
    let content = exporter_for(options).export(&constellation)?;

    if !options.dry_run {
        fs::write(path, &content)
            .map_err(|e| ConversionError::WriteError(path.to_path_buf(), e.to_string()))?;
        info!(
            "Converted '{}' ({} stars) in {}",
            constellation.name,
            constellation.graph.len(),
            path.display()
        );
    }

    Ok(ConversionReport {
        path: path.to_path_buf(),
        stars: constellation.graph.len(),
        written: !options.dry_run,
        content,
    })
}

fn exporter_for(options: &ConvertOptions) -> ConstellationExporter {
    if options.pretty {
        ConstellationExporter::pretty()
    } else {
        ConstellationExporter::new()
    }
}
