//! # Tabkit Core
//!
//! Core types for tabkit: planar points in millimetres, directed edges,
//! vertex loops and the tab phase model shared by the pattern generators.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{GeometryError, GeometryResult};
pub use geometry::{Point, EPSILON};
pub use types::{Edge, Phase, Polygon, TabState};
