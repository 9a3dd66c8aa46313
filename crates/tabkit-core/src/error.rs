//! Geometry errors
//!
//! Raised by the shape builders and the toothing engine. Each downstream
//! crate wraps these in its own error enum.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a shape or edge cannot be constructed from its inputs. These
/// always indicate a mistake in the caller's dimensions and are never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Edge start and end coincide, so it has no direction
    #[error("Zero-length edge at ({x}, {y})")]
    ZeroLengthEdge {
        /// X coordinate of the degenerate edge.
        x: f64,
        /// Y coordinate of the degenerate edge.
        y: f64,
    },

    /// A size parameter that must be positive was not
    #[error("Dimension '{name}' must be positive, got {value}")]
    NonPositiveDimension {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A generation parameter is out of its valid domain
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A vertex loop needs at least three vertices
    #[error("Polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },
}

impl GeometryError {
    /// Build a [`GeometryError::NonPositiveDimension`]
    pub fn non_positive(name: impl Into<String>, value: f64) -> Self {
        GeometryError::NonPositiveDimension {
            name: name.into(),
            value,
        }
    }

    /// Build a [`GeometryError::InvalidParameter`]
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GeometryError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for geometry construction.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
