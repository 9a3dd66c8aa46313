//! Polygon Builder
//!
//! Parametric base shapes as vertex loops anchored at an origin. Winding is
//! fixed per shape so that the tooth normal (a quarter turn of each edge
//! direction) points the same way on every edge of a shape.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tabkit_core::{GeometryError, GeometryResult, Point, Polygon};

/// Size of a rectangular opening
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDims {
    pub width: f64,
    pub height: f64,
}

impl RectDims {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Material allowances subtracted from the front face of a frustum
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontFudges {
    /// Subtracted from the face extent along x
    pub height: f64,
    /// Subtracted from the face extent along y
    pub width: f64,
}

fn require_positive(name: &str, value: f64) -> GeometryResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::non_positive(name, value))
    }
}

fn require_non_negative(name: &str, value: f64) -> GeometryResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid(
            name,
            format!("must be >= 0, got {}", value),
        ))
    }
}

/// Axis-aligned rectangle.
///
/// `height` runs along x and `width` along y. Vertices are
/// `(0,width) → (height,width) → (height,0) → origin`, so consecutive edge
/// lengths read `height, width, height, width`.
pub fn rectangle(origin: Point, height: f64, width: f64) -> GeometryResult<Polygon> {
    require_positive("height", height)?;
    require_positive("width", width)?;

    Polygon::new(vec![
        origin + Point::new(0.0, width),
        origin + Point::new(height, width),
        origin + Point::new(height, 0.0),
        origin,
    ])
}

/// Isosceles trapezoid with its wide edge on `origin` along +x and the
/// narrow edge centred `height` above it.
///
/// `narrow_width` may exceed `wide_width`, which gives a flaring trapezoid.
pub fn symmetric_trapezoid(
    origin: Point,
    height: f64,
    wide_width: f64,
    narrow_width: f64,
) -> GeometryResult<Polygon> {
    require_non_negative("height", height)?;
    require_positive("wide_width", wide_width)?;
    require_positive("narrow_width", narrow_width)?;

    let inset = (wide_width - narrow_width) / 2.0;
    Polygon::new(vec![
        origin,
        origin + Point::new(wide_width, 0.0),
        origin + Point::new(wide_width - inset, height),
        origin + Point::new(inset, height),
    ])
}

/// Slant height of a frustum side face: `sqrt(depth² + ((open - closed)/2)²)`
pub fn slant_height(depth: f64, open_extent: f64, closed_extent: f64) -> f64 {
    depth.hypot((open_extent - closed_extent) / 2.0)
}

/// Unrolled faces of a truncated rectangular pyramid.
///
/// Returns the front face (the closed opening shrunk by `fudges`) followed by
/// one trapezoid per pair of opposite side faces. Opposite faces are identical
/// by symmetry, so two trapezoids cover all four sides.
pub fn open_frustum(
    origin: Point,
    closed: RectDims,
    open: RectDims,
    depth: f64,
    fudges: FrontFudges,
) -> GeometryResult<[Polygon; 3]> {
    require_non_negative("depth", depth)?;

    let front = rectangle(
        origin,
        closed.width - fudges.height,
        closed.height - fudges.width,
    )?;
    let across_width = symmetric_trapezoid(
        origin,
        slant_height(depth, open.height, closed.height),
        open.width,
        closed.width,
    )?;
    let across_height = symmetric_trapezoid(
        origin,
        slant_height(depth, open.width, closed.width),
        open.height,
        closed.height,
    )?;

    Ok([front, across_width, across_height])
}

/// Sleeve panel for a sewn cylinder with gored seam allowances.
///
/// The bottom and top edges each carry `gores` trapezoidal gores of depth
/// `overlap`; the outer edge of a gore is shorter by `2π·overlap / gores` so
/// the allowance folds flat around an end cap. The right side gets a plain
/// seam flap of width `overlap`.
pub fn gored_rectangle(
    origin: Point,
    width: f64,
    height: f64,
    overlap: f64,
    gores: u32,
) -> GeometryResult<Polygon> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    require_positive("overlap", overlap)?;
    if gores == 0 {
        return Err(GeometryError::invalid("gores", "need at least one gore"));
    }

    let count = gores as f64;
    let bay = width / count;
    let tip = (width - 2.0 * PI * overlap) / count;
    if tip <= 0.0 {
        return Err(GeometryError::invalid(
            "overlap",
            format!(
                "gore tips vanish: width {} is too narrow for overlap {}",
                width, overlap
            ),
        ));
    }
    let taper = (bay - tip) / 2.0;

    let at = |x: f64, y: f64| origin + Point::new(x, y);
    let mut vertices = Vec::with_capacity(6 * gores as usize + 4);

    for i in 0..gores {
        let left = i as f64 * bay;
        vertices.push(at(left, 0.0));
        vertices.push(at(left + taper, -overlap));
        vertices.push(at(left + bay - taper, -overlap));
    }
    vertices.push(at(width, 0.0));

    vertices.push(at(width + overlap, 0.0));
    vertices.push(at(width + overlap, height));
    vertices.push(at(width, height));

    for i in (0..gores).rev() {
        let left = i as f64 * bay;
        vertices.push(at(left + bay - taper, height + overlap));
        vertices.push(at(left + taper, height + overlap));
        vertices.push(at(left, height));
    }

    Polygon::new(vertices)
}
