//! Edge, polygon and tab-phase types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GeometryError, GeometryResult};
use crate::geometry::Point;

/// A directed edge. Direction decides which side the teeth grow on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Unit vector from start to end
    pub fn direction(&self) -> GeometryResult<Point> {
        (self.end - self.start)
            .normalized()
            .map_err(|_| GeometryError::ZeroLengthEdge {
                x: self.start.x,
                y: self.start.y,
            })
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    pub fn translated(&self, offset: Point) -> Edge {
        Edge::new(self.start + offset, self.end + offset)
    }
}

/// A cyclic vertex loop.
///
/// Edges run between consecutive vertices and wrap from the last vertex back
/// to the first. Self-intersection is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Build a loop from at least three vertices
    pub fn new(vertices: Vec<Point>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if let Some(bad) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(GeometryError::invalid(
                "vertex",
                format!("non-finite coordinate ({}, {})", bad.x, bad.y),
            ));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices, which is also the number of edges
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in loop order, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// The loop as an open polyline with the first vertex repeated at the end
    pub fn outline(&self) -> Vec<Point> {
        let mut points = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            points.push(*first);
        }
        points
    }

    /// Shoelace area; positive for counter-clockwise loops
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|e| e.start.cross(&e.end))
            .sum::<f64>()
            / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|e| e.length()).sum()
    }

    pub fn translated(&self, offset: Point) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
        }
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.vertices.iter().fold(
            (
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        )
    }
}

/// Which half-cycle of an edge's zig-zag is recessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The run around the edge midpoint sits on the baseline
    Innie,
    /// The run around the edge midpoint is pushed out by the tooth length
    Outie,
}

impl Phase {
    pub fn is_innie(&self) -> bool {
        matches!(self, Phase::Innie)
    }

    /// The transition-index parity (0 or 1) that starts out raised
    pub fn raised_parity(&self) -> i64 {
        match self {
            Phase::Innie => 1,
            Phase::Outie => 0,
        }
    }

}

impl Default for Phase {
    fn default() -> Self {
        Self::Innie
    }
}

impl From<bool> for Phase {
    fn from(is_innie: bool) -> Self {
        if is_innie {
            Phase::Innie
        } else {
            Phase::Outie
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Innie => write!(f, "innie"),
            Self::Outie => write!(f, "outie"),
        }
    }
}

/// Whether a stretch of a toothed edge lies on the baseline or on the tooth line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabState {
    Flat,
    Raised,
}

impl TabState {
    /// State of the run leading into transition `index`.
    ///
    /// Indices are signed offsets from the edge midpoint (`-n..n`); the
    /// phase decides which parity is raised.
    pub fn before_transition(index: i64, phase: Phase) -> TabState {
        if index.rem_euclid(2) == phase.raised_parity() {
            TabState::Raised
        } else {
            TabState::Flat
        }
    }

    pub fn toggled(&self) -> TabState {
        match self {
            TabState::Flat => TabState::Raised,
            TabState::Raised => TabState::Flat,
        }
    }

    /// Displacement from the baseline for this state
    pub fn offset(&self, tooth: Point) -> Point {
        match self {
            TabState::Flat => Point::ORIGIN,
            TabState::Raised => tooth,
        }
    }
}
