//! Error types for the patterns crate.
//!
//! Geometry failures carry the panel and edge they came from so a bad
//! calibration table can be traced back to the offending entry.

use tabkit_core::GeometryError;
use thiserror::Error;

/// Errors that can occur while building panels and drawings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// A shape could not be built from its dimensions.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Toothing one edge of a panel failed.
    #[error("Panel '{panel}' edge {index}: {source}")]
    Edge {
        panel: String,
        index: usize,
        #[source]
        source: GeometryError,
    },

    /// The per-edge settings do not line up with the polygon's edges.
    #[error("Panel '{panel}' has {expected} edges but {actual} edge settings")]
    PhaseCountMismatch {
        panel: String,
        expected: usize,
        actual: usize,
    },

    /// An artifact configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_pattern_error_display() {
        let err = PatternError::PhaseCountMismatch {
            panel: "bellows_1".to_string(),
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Panel 'bellows_1' has 4 edges but 3 edge settings"
        );

        let err = PatternError::InvalidConfig("no panels".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: no panels");
    }

    #[test]
    fn test_edge_error_keeps_source() {
        let err = PatternError::Edge {
            panel: "front".to_string(),
            index: 2,
            source: GeometryError::ZeroLengthEdge { x: 0.0, y: 0.0 },
        };
        assert_eq!(
            err.to_string(),
            "Panel 'front' edge 2: Zero-length edge at (0, 0)"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_geometry_conversion() {
        let err: PatternError = GeometryError::TooFewVertices { count: 1 }.into();
        assert!(matches!(err, PatternError::Geometry(_)));
    }
}
