//! starfetch-convert - constellation file converter
//!
//! Rewrites constellation descriptions from the legacy starfetch JSON layout
//! into the layout read by the constellation renderer:
//! - `import`: parse and schema-check legacy files
//! - `convert`: remap fields, flatten the graph table into `[col, row, star]`
//!   triples, and rewrite files in place
//! - `export`: serialize converted constellations
//! - `models`: both document layouts

#[cfg(feature = "cli")]
pub mod cli;
pub mod convert;
pub mod export;
pub mod import;
pub mod models;

// Re-export commonly used types
pub use convert::{
    ConversionError, ConversionReport, ConvertOptions, convert, convert_file, convert_str,
};
pub use export::{ConstellationExporter, ExportError};
pub use import::{ImportError, LegacyImporter};
pub use models::{Constellation, LegacyConstellation, LegacyGraph, Star};
