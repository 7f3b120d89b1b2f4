//! Error types for VastuRaster

use crate::tf::TransformError;
use crate::vector_map::BoundaryError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// VastuRaster error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Broken id reference while walking an area boundary
    #[error("Graph integrity error: {0}")]
    GraphIntegrity(#[from] BoundaryError),

    /// Transform lookup failed and strict mode was requested
    #[error("Transform unavailable: {0}")]
    TransformUnavailable(#[from] TransformError),

    /// Grid geometry cannot be represented
    #[error("Invalid grid geometry: {0}")]
    InvalidGeometry(String),

    /// Quantization range is empty or inverted
    #[error("Invalid value range: min {min}, max {max}")]
    InvalidRange {
        /// Lower bound of the layer encoding
        min: f32,
        /// Upper bound of the layer encoding
        max: f32,
    },

    /// Layer is not present in the grid map
    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    /// Record rejected by the map graph
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Configuration could not be parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message() {
        let err = Error::InvalidRange { min: 5.0, max: 1.0 };
        assert!(err.to_string().contains("min 5"));
        assert!(err.to_string().contains("max 1"));
    }

    #[test]
    fn test_boundary_conversion() {
        let err: Error = BoundaryError::NullArea.into();
        assert!(matches!(err, Error::GraphIntegrity(BoundaryError::NullArea)));
    }
}
