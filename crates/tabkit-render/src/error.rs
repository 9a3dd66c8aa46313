//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while rendering or writing a drawing.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing the output file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The drawing has nothing to draw.
    #[error("Drawing '{0}' is empty")]
    EmptyDrawing(String),

    /// The target sheet has no area.
    #[error("Drawing '{name}' has invalid sheet size {width}x{height}")]
    InvalidSheet {
        name: String,
        width: f64,
        height: f64,
    },
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
