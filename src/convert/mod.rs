//! Constellation format converter module
//!
//! Provides functionality to convert legacy starfetch constellations into the
//! renderer layout, either in memory or in place on disk.

pub mod converter;

pub use converter::{
    ConversionError, ConversionReport, ConvertOptions, convert, convert_constellation,
    convert_file, convert_str, flatten_graph,
};
