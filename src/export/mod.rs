//! Export functionality
//!
//! Provides the serializer for constellations in the renderer layout.

pub mod constellation;

/// Error during export
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Re-export for convenience
pub use constellation::ConstellationExporter;
