//! Edge Toothing Engine
//!
//! Turns one straight edge into a zig-zag polyline of interlocking tabs.
//!
//! Tooth transitions sit at half-pitch offsets on both sides of the edge
//! midpoint, so the pattern is symmetric about it:
//!
//! ```text
//!   index:   -3   -2   -1    0    1    2
//!            |    |    | mid|    |    |
//!   start ---+----+----+-x--+----+----+--- end
//! ```
//!
//! Transitions closer than `exclusion` to either end are dropped, which keeps
//! corners free of short tab stubs. Each transition contributes a baseline
//! point and a point pushed out along the edge normal by `tooth_length`; the
//! order of the pair depends on the [`TabState`] leading into it.

use serde::{Deserialize, Serialize};
use tabkit_core::{Edge, GeometryError, GeometryResult, Phase, Point, TabState};
use tracing::debug;

/// Generation parameters for one edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToothParams {
    /// Spacing between tooth transitions along the edge (mm)
    pub division_length: f64,
    /// Which half-cycle sits on the baseline around the midpoint
    pub phase: Phase,
    /// Signed shift of the pattern centre along the edge (mm)
    pub midpoint_offset: f64,
    /// Extension of both end points, in multiples of `division_length`
    pub overshoot: f64,
    /// Tooth-free margin kept clear at both ends (mm)
    pub exclusion: f64,
    /// Depth of each tooth along the edge normal (mm)
    pub tooth_length: f64,
}

impl Default for ToothParams {
    fn default() -> Self {
        Self {
            division_length: 8.0,
            phase: Phase::Innie,
            midpoint_offset: 0.0,
            overshoot: 1.0,
            exclusion: 10.0,
            tooth_length: 4.0,
        }
    }
}

impl ToothParams {
    pub fn new(division_length: f64, phase: impl Into<Phase>) -> Self {
        Self {
            division_length,
            phase: phase.into(),
            ..Self::default()
        }
    }

    pub fn with_midpoint_offset(mut self, midpoint_offset: f64) -> Self {
        self.midpoint_offset = midpoint_offset;
        self
    }

    pub fn with_overshoot(mut self, overshoot: f64) -> Self {
        self.overshoot = overshoot;
        self
    }

    pub fn with_exclusion(mut self, exclusion: f64) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn with_tooth_length(mut self, tooth_length: f64) -> Self {
        self.tooth_length = tooth_length;
        self
    }

    pub fn validate(&self) -> GeometryResult<()> {
        if !(self.division_length.is_finite() && self.division_length > 0.0) {
            return Err(GeometryError::invalid(
                "division_length",
                format!("must be > 0, got {}", self.division_length),
            ));
        }
        for (name, value) in [
            ("overshoot", self.overshoot),
            ("exclusion", self.exclusion),
            ("tooth_length", self.tooth_length),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GeometryError::invalid(
                    name,
                    format!("must be >= 0, got {}", value),
                ));
            }
        }
        if !self.midpoint_offset.is_finite() {
            return Err(GeometryError::invalid("midpoint_offset", "must be finite"));
        }
        Ok(())
    }
}

/// The zig-zag polyline generated for one edge
#[derive(Debug, Clone, PartialEq)]
pub struct ToothedPath {
    points: Vec<Point>,
    transitions: usize,
}

impl ToothedPath {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of tooth transitions placed on the edge
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// True when the edge came out as a single extended segment
    pub fn is_straight(&self) -> bool {
        self.transitions == 0
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }
}

fn checked_direction(start: Point, end: Point) -> GeometryResult<Point> {
    if !start.is_finite() || !end.is_finite() {
        return Err(GeometryError::invalid("edge", "non-finite endpoint"));
    }
    Edge::new(start, end).direction()
}

/// Tooth transition positions for an edge, keyed by signed index.
///
/// Indices run `-n..n`; index `-k-1` mirrors index `k` about the (shifted)
/// midpoint. Every position keeps at least `exclusion` from both ends, so a
/// shifted pattern loses teeth on its far side rather than crossing an end.
/// An empty result means the edge is too short for any tooth.
pub fn transition_positions(
    start: Point,
    end: Point,
    params: &ToothParams,
) -> GeometryResult<Vec<(i64, Point)>> {
    params.validate()?;
    let unit = checked_direction(start, end)?;
    Ok(layout_transitions(start, end, unit, params))
}

fn layout_transitions(
    start: Point,
    end: Point,
    unit: Point,
    params: &ToothParams,
) -> Vec<(i64, Point)> {
    // Signed position of the pattern centre along the edge; teeth may reach
    // only as far as the nearer end allows, mirrored to both sides.
    let length = start.distance_to(&end);
    let centre = length / 2.0 + params.midpoint_offset;
    let midpoint = start + unit * centre;
    let reach = centre.min(length - centre) - params.exclusion;

    let cuts: Vec<f64> = (0u32..)
        .map(|k| (k as f64 + 0.5) * params.division_length)
        .take_while(|&distance| reach > distance)
        .collect();

    let toward_start = cuts
        .iter()
        .enumerate()
        .rev()
        .map(|(k, &d)| (-(k as i64) - 1, midpoint - unit * d));
    let toward_end = cuts
        .iter()
        .enumerate()
        .map(|(k, &d)| (k as i64, midpoint + unit * d));

    toward_start.chain(toward_end).collect()
}

/// Zig-zag tab polyline for the edge `start → end`.
///
/// The first and last points extend `overshoot · division_length` past the
/// edge ends; each is raised when the run it belongs to is raised. Edges too
/// short for any transition come back as the two extended end points.
pub fn subdivide_line(
    start: Point,
    end: Point,
    params: &ToothParams,
) -> GeometryResult<ToothedPath> {
    params.validate()?;
    let unit = checked_direction(start, end)?;
    let lead = unit * (params.division_length * params.overshoot);
    let tooth = unit.rotate90() * params.tooth_length;

    let transitions = layout_transitions(start, end, unit, params);
    let (Some(&(first_index, _)), Some(&(last_index, _))) =
        (transitions.first(), transitions.last())
    else {
        debug!(
            length = start.distance_to(&end),
            exclusion = params.exclusion,
            "edge too short for teeth, emitting straight segment"
        );
        return Ok(ToothedPath {
            points: vec![start - lead, end + lead],
            transitions: 0,
        });
    };

    let mut points = Vec::with_capacity(2 * transitions.len() + 2);

    let leading = TabState::before_transition(first_index, params.phase);
    points.push(start - lead + leading.offset(tooth));

    for &(index, position) in &transitions {
        let before = TabState::before_transition(index, params.phase);
        points.push(position + before.offset(tooth));
        points.push(position + before.toggled().offset(tooth));
    }

    let trailing = TabState::before_transition(last_index, params.phase).toggled();
    points.push(end + lead + trailing.offset(tooth));

    Ok(ToothedPath {
        points,
        transitions: transitions.len(),
    })
}

/// Untoothed edge: the segment extended by `overshoot · division_length` at
/// both ends.
pub fn straight_line(
    start: Point,
    end: Point,
    division_length: f64,
    overshoot: f64,
) -> GeometryResult<ToothedPath> {
    ToothParams {
        division_length,
        overshoot,
        ..ToothParams::default()
    }
    .validate()?;
    let unit = checked_direction(start, end)?;
    let lead = unit * (division_length * overshoot);

    Ok(ToothedPath {
        points: vec![start - lead, end + lead],
        transitions: 0,
    })
}
