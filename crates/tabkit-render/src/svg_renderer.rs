//! SVG renderer for cut sheets
//!
//! One document per drawing, sized in millimetres with a `viewBox` in the same
//! units, so a coordinate of 20 lands 20 mm from the sheet corner. Every
//! segment becomes its own `<line>`; laser software treats each as a cut.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use svg::node::element::{Circle, Line};
use svg::{Document, Node};
use tabkit_core::Point;
use tabkit_patterns::{Drawing, SheetSize};
use tracing::{debug, info};

use crate::error::{RenderError, RenderResult};
use crate::Renderer;

/// Stroke used for every element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            stroke_color: "rgb(255,0,0)".to_string(),
            stroke_width: 1.0,
        }
    }
}

pub struct SvgRenderer {
    document: Document,
    settings: RenderSettings,
    elements: usize,
}

impl SvgRenderer {
    pub fn new(sheet: SheetSize, settings: RenderSettings) -> Self {
        let document = Document::new()
            .set("width", format!("{}mm", sheet.width_mm))
            .set("height", format!("{}mm", sheet.height_mm))
            .set(
                "viewBox",
                format!("0 0 {} {}", sheet.width_mm, sheet.height_mm),
            );
        Self {
            document,
            settings,
            elements: 0,
        }
    }

    /// Renderer for `drawing`'s sheet with the drawing already on it
    pub fn for_drawing(drawing: &Drawing, settings: RenderSettings) -> RenderResult<Self> {
        let sheet = drawing.sheet;
        if !(sheet.width_mm > 0.0 && sheet.height_mm > 0.0) {
            return Err(RenderError::InvalidSheet {
                name: drawing.name.clone(),
                width: sheet.width_mm,
                height: sheet.height_mm,
            });
        }
        if drawing.is_empty() {
            return Err(RenderError::EmptyDrawing(drawing.name.clone()));
        }

        let mut renderer = Self::new(sheet, settings);
        renderer.render_drawing(drawing);
        debug!(
            drawing = %drawing.name,
            elements = renderer.elements,
            "rendered drawing"
        );
        Ok(renderer)
    }

    /// Number of SVG elements drawn so far
    pub fn element_count(&self) -> usize {
        self.elements
    }

    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        svg::save(path, &self.document)?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render_polyline(&mut self, points: &[Point]) {
        for pair in points.windows(2) {
            let line = Line::new()
                .set("x1", pair[0].x)
                .set("y1", pair[0].y)
                .set("x2", pair[1].x)
                .set("y2", pair[1].y)
                .set("stroke", self.settings.stroke_color.as_str())
                .set("stroke-width", self.settings.stroke_width);
            self.document.append(line);
            self.elements += 1;
        }
    }

    fn render_circle(&mut self, center: Point, radius: f64) {
        let circle = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius)
            .set("fill", "none")
            .set("stroke", self.settings.stroke_color.as_str())
            .set("stroke-width", self.settings.stroke_width);
        self.document.append(circle);
        self.elements += 1;
    }
}

/// Render `drawing` to `<dir>/<name>.svg`
pub fn save_drawing(
    drawing: &Drawing,
    dir: impl AsRef<Path>,
    settings: &RenderSettings,
) -> RenderResult<PathBuf> {
    let renderer = SvgRenderer::for_drawing(drawing, settings.clone())?;
    let path = dir.as_ref().join(format!("{}.svg", drawing.name));
    renderer.save(&path)?;
    info!(
        path = %path.display(),
        elements = renderer.element_count(),
        "wrote drawing"
    );
    Ok(path)
}
