//! Frustum-shaped artifacts: the camera bellows and the 4x5 lens frustum.

use serde::{Deserialize, Serialize};
use tabkit_core::Point;
use tracing::debug;

use super::{pt, require_name, require_positive, PanelEdges};
use crate::assembly::{Drawing, EdgeSpec, Panel, SheetSize};
use crate::error::{PatternError, PatternResult};
use crate::polygon::{open_frustum, FrontFudges, RectDims};

/// Lens opening cut into the front face, centred on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensMount {
    pub diameter: f64,
}

/// A straight annotation line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// An unrolled open frustum: front face plus two side trapezoids, one sheet each
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrustumPattern {
    /// Output name prefix; sheets are `<name>_0`, `<name>_1`, `<name>_2`
    pub name: String,
    pub division_length: f64,
    pub depth: f64,
    pub origin: Point,
    pub closed: RectDims,
    pub open: RectDims,
    #[serde(default)]
    pub fudges: FrontFudges,
    pub sheet: SheetSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens_mount: Option<LensMount>,
    /// Drawn on the front-face sheet only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_mark: Option<Segment>,
    /// Front face, width trapezoid, height trapezoid
    pub panels: Vec<PanelEdges>,
}

impl FrustumPattern {
    /// Bellows for the 64 mm lens board
    pub fn bellows() -> Self {
        let template = EdgeSpec::default();
        Self {
            name: "bellows".to_string(),
            division_length: 8.0,
            depth: 150.0,
            origin: pt(20.0, 20.0),
            closed: RectDims::new(64.0, 64.0),
            open: RectDims::new(178.0, 128.0),
            fudges: FrontFudges::default(),
            sheet: SheetSize::new(240.0, 240.0),
            lens_mount: Some(LensMount { diameter: 34.6 }),
            alignment_mark: Some(Segment {
                from: pt(20.0, 20.0),
                to: pt(20.0, 84.0),
            }),
            panels: vec![
                PanelEdges::from_phases(&[true, true, true, true], template),
                PanelEdges::from_phases(&[true, false, true, false], template),
                PanelEdges::from_phases(&[true, false, true, false], template),
            ],
        }
    }

    /// Lens frustum of the 4x5 film holder
    pub fn film_holder_4x5() -> Self {
        let template = EdgeSpec::default().with_tooth_length(3.0);
        let short = template.with_tooth_length(2.5);
        Self {
            name: "film_holder_4x5".to_string(),
            division_length: 8.0,
            depth: 90.0,
            origin: pt(20.0, 20.0),
            closed: RectDims::new(60.0, 60.0),
            open: RectDims::new(121.5, 98.0),
            fudges: FrontFudges {
                height: 1.0,
                width: 1.0,
            },
            sheet: SheetSize::new(240.0, 240.0),
            lens_mount: Some(LensMount { diameter: 34.6 }),
            alignment_mark: None,
            panels: vec![
                PanelEdges::from_phases(&[true, true, true, true], template),
                vec![
                    template.with_phase(true).with_midpoint_offset(-0.5),
                    template.with_phase(false),
                    template.with_phase(true).with_midpoint_offset(0.5),
                    short.with_phase(true),
                ]
                .into(),
                vec![
                    template.with_phase(false),
                    template.with_phase(false),
                    template.with_phase(false),
                    short.with_phase(false),
                ]
                .into(),
            ],
        }
    }

    pub fn validate(&self) -> PatternResult<()> {
        require_name(&self.name)?;
        require_positive("division_length", self.division_length)?;
        require_positive("sheet width", self.sheet.width_mm)?;
        require_positive("sheet height", self.sheet.height_mm)?;
        if self.panels.len() != 3 {
            return Err(PatternError::InvalidConfig(format!(
                "{}: a frustum has 3 panels, got {}",
                self.name,
                self.panels.len()
            )));
        }
        if let Some(lens) = &self.lens_mount {
            require_positive("lens diameter", lens.diameter)?;
        }
        Ok(())
    }

    /// Centre of the (fudged) front face
    pub fn front_face_center(&self) -> Point {
        self.origin
            + Point::new(
                (self.closed.width - self.fudges.height) / 2.0,
                (self.closed.height - self.fudges.width) / 2.0,
            )
    }

    /// One drawing per panel, annotations on the front face
    pub fn build(&self) -> PatternResult<Vec<Drawing>> {
        self.validate()?;
        let polygons = open_frustum(self.origin, self.closed, self.open, self.depth, self.fudges)?;

        let mut drawings = Vec::with_capacity(polygons.len());
        for (index, (polygon, edges)) in polygons.into_iter().zip(&self.panels).enumerate() {
            let name = format!("{}_{}", self.name, index);
            debug!(drawing = %name, vertices = polygon.len(), "building frustum panel");

            let panel = Panel::new(name.clone(), polygon, self.division_length)
                .with_edges(edges.edges.clone());
            let mut drawing = Drawing::new(name, self.sheet);
            drawing.add_panel(&panel)?;

            if index == 0 {
                if let Some(mark) = &self.alignment_mark {
                    drawing.add_line(mark.from, mark.to);
                }
                if let Some(lens) = &self.lens_mount {
                    drawing.add_circle(self.front_face_center(), lens.diameter / 2.0)?;
                }
            }
            drawings.push(drawing);
        }
        Ok(drawings)
    }
}
