//! Import functionality
//!
//! Provides the parser for constellation files in the legacy starfetch layout.

pub mod legacy;

/// Error during import
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Schema error: {0}")]
    SchemaError(String),
}

// Re-export for convenience
pub use legacy::LegacyImporter;
