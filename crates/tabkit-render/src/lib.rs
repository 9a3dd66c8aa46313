//! # Tabkit Render
//!
//! Output backends for [`Drawing`](tabkit_patterns::Drawing)s. The pattern
//! crates only produce polylines and circles in millimetres; a [`Renderer`]
//! turns them into something a laser cutter can read.

pub mod error;
pub mod svg_renderer;

pub use error::{RenderError, RenderResult};
pub use svg_renderer::{save_drawing, RenderSettings, SvgRenderer};

use tabkit_core::Point;
use tabkit_patterns::Drawing;

/// Sink for drawing primitives
pub trait Renderer {
    /// Draw consecutive point pairs as straight segments
    fn render_polyline(&mut self, points: &[Point]);

    /// Draw an unfilled circle
    fn render_circle(&mut self, center: Point, radius: f64);

    /// Draw every polyline, then every circle
    fn render_drawing(&mut self, drawing: &Drawing) {
        for line in &drawing.polylines {
            self.render_polyline(line);
        }
        for circle in &drawing.circles {
            self.render_circle(circle.center, circle.radius);
        }
    }
}
