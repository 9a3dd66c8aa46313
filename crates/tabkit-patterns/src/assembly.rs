//! Panel assembly
//!
//! A [`Panel`] pairs a vertex loop with one [`EdgeSpec`] per edge. Every
//! per-edge adjustment (phase, pattern shift, tooth depth, translation) lives
//! on the edge record itself, so nothing downstream has to match edges by
//! position. [`Drawing`] collects the finished polylines and annotations for
//! one output sheet.

use serde::{Deserialize, Serialize};
use tabkit_core::{GeometryError, GeometryResult, Phase, Point, Polygon};
use tracing::{debug, warn};

use crate::error::{PatternError, PatternResult};
use crate::toothing::{straight_line, subdivide_line, ToothParams, ToothedPath};

/// How an edge is cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    /// Zig-zag tabs
    #[default]
    Toothed,
    /// A single straight cut
    Plain,
}

/// Settings attached to one edge of a panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSpec {
    pub style: EdgeStyle,
    pub phase: Phase,
    pub midpoint_offset: f64,
    pub tooth_length: f64,
    pub exclusion: f64,
    pub overshoot: f64,
    /// Added to both end points before the edge is cut
    pub translation: Point,
}

impl Default for EdgeSpec {
    fn default() -> Self {
        let tooth = ToothParams::default();
        Self {
            style: EdgeStyle::Toothed,
            phase: tooth.phase,
            midpoint_offset: tooth.midpoint_offset,
            tooth_length: tooth.tooth_length,
            exclusion: tooth.exclusion,
            overshoot: tooth.overshoot,
            translation: Point::ORIGIN,
        }
    }
}

impl EdgeSpec {
    pub fn toothed(phase: impl Into<Phase>) -> Self {
        Self {
            phase: phase.into(),
            ..Self::default()
        }
    }

    pub fn plain() -> Self {
        Self {
            style: EdgeStyle::Plain,
            ..Self::default()
        }
    }

    pub fn with_phase(mut self, phase: impl Into<Phase>) -> Self {
        self.phase = phase.into();
        self
    }

    pub fn with_midpoint_offset(mut self, midpoint_offset: f64) -> Self {
        self.midpoint_offset = midpoint_offset;
        self
    }

    pub fn with_tooth_length(mut self, tooth_length: f64) -> Self {
        self.tooth_length = tooth_length;
        self
    }

    pub fn with_exclusion(mut self, exclusion: f64) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn with_overshoot(mut self, overshoot: f64) -> Self {
        self.overshoot = overshoot;
        self
    }

    pub fn with_translation(mut self, translation: Point) -> Self {
        self.translation = translation;
        self
    }

    /// Toothing parameters for this edge at the given pitch
    pub fn tooth_params(&self, division_length: f64) -> ToothParams {
        ToothParams {
            division_length,
            phase: self.phase,
            midpoint_offset: self.midpoint_offset,
            overshoot: self.overshoot,
            exclusion: self.exclusion,
            tooth_length: self.tooth_length,
        }
    }

    /// Cut `start → end` according to this record
    pub fn cut(
        &self,
        start: Point,
        end: Point,
        division_length: f64,
    ) -> GeometryResult<ToothedPath> {
        let (start, end) = (start + self.translation, end + self.translation);
        match self.style {
            EdgeStyle::Toothed => {
                subdivide_line(start, end, &self.tooth_params(division_length))
            }
            EdgeStyle::Plain => straight_line(start, end, division_length, self.overshoot),
        }
    }
}

/// One vertex loop with its per-edge settings
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub name: String,
    pub polygon: Polygon,
    pub division_length: f64,
    pub edges: Vec<EdgeSpec>,
}

impl Panel {
    pub fn new(name: impl Into<String>, polygon: Polygon, division_length: f64) -> Self {
        Self {
            name: name.into(),
            polygon,
            division_length,
            edges: Vec::new(),
        }
    }

    pub fn with_edges(mut self, edges: Vec<EdgeSpec>) -> Self {
        self.edges = edges;
        self
    }

    /// Default toothed edges, one per phase flag (`true` = innie)
    pub fn with_phases(self, phases: &[bool]) -> Self {
        self.with_edge_template(phases, EdgeSpec::default())
    }

    /// Copies of `template`, one per phase flag
    pub fn with_edge_template(self, phases: &[bool], template: EdgeSpec) -> Self {
        let edges = phases.iter().map(|&p| template.with_phase(p)).collect();
        self.with_edges(edges)
    }
}

/// Cut every edge of a panel.
///
/// The edge records must match the polygon's edges one to one; a short or
/// long list is a configuration error and is never wrapped or truncated.
pub fn assemble_panel(panel: &Panel) -> PatternResult<Vec<ToothedPath>> {
    if panel.edges.len() != panel.polygon.len() {
        return Err(PatternError::PhaseCountMismatch {
            panel: panel.name.clone(),
            expected: panel.polygon.len(),
            actual: panel.edges.len(),
        });
    }

    debug!(panel = %panel.name, edges = panel.edges.len(), "assembling panel");

    panel
        .polygon
        .edges()
        .zip(&panel.edges)
        .enumerate()
        .map(|(index, (edge, spec))| {
            let path = spec
                .cut(edge.start, edge.end, panel.division_length)
                .map_err(|source| PatternError::Edge {
                    panel: panel.name.clone(),
                    index,
                    source,
                })?;
            if spec.style == EdgeStyle::Toothed && path.is_straight() {
                warn!(
                    panel = %panel.name,
                    index,
                    length = edge.length(),
                    "edge too short for teeth"
                );
            }
            Ok(path)
        })
        .collect()
}

/// Physical sheet size of a drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl SheetSize {
    pub const fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }
}

/// An unfilled circle annotation (lens mounts, drill holes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Everything destined for one output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub name: String,
    pub sheet: SheetSize,
    pub polylines: Vec<Vec<Point>>,
    pub circles: Vec<Circle>,
}

impl Drawing {
    pub fn new(name: impl Into<String>, sheet: SheetSize) -> Self {
        Self {
            name: name.into(),
            sheet,
            polylines: Vec::new(),
            circles: Vec::new(),
        }
    }

    /// Cut a panel and append one polyline per edge
    pub fn add_panel(&mut self, panel: &Panel) -> PatternResult<()> {
        let paths = assemble_panel(panel)?;
        self.polylines
            .extend(paths.into_iter().map(ToothedPath::into_points));
        Ok(())
    }

    /// Append a polygon's closed outline without teeth
    pub fn add_outline(&mut self, polygon: &Polygon) {
        self.polylines.push(polygon.outline());
    }

    pub fn add_line(&mut self, from: Point, to: Point) {
        self.polylines.push(vec![from, to]);
    }

    pub fn add_circle(&mut self, center: Point, radius: f64) -> GeometryResult<()> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::non_positive("radius", radius));
        }
        self.circles.push(Circle { center, radius });
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.circles.is_empty()
    }

    /// Number of straight segments a renderer will draw
    pub fn segment_count(&self) -> usize {
        self.polylines
            .iter()
            .map(|line| line.len().saturating_sub(1))
            .sum()
    }
}
