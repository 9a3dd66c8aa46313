//! 4x5 backplate: a plain holder outline with a toothed film hole inside it.

use serde::{Deserialize, Serialize};
use tabkit_core::Point;
use tracing::debug;

use super::{pt, require_name, require_positive};
use crate::assembly::{Drawing, EdgeSpec, Panel, SheetSize};
use crate::error::{PatternError, PatternResult};
use crate::polygon::rectangle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackplateConfig {
    pub name: String,
    pub division_length: f64,
    pub origin: Point,
    pub sheet: SheetSize,
    /// Holder extent along x
    pub holder_length: f64,
    /// Holder extent along y
    pub holder_width: f64,
    pub film_hole_length: f64,
    pub film_hole_width: f64,
    /// Gap between the holder's left edge and the film hole
    pub exposure_field_distance: f64,
    pub holder_edges: Vec<EdgeSpec>,
    /// Hole edge records; the hole offset is added to their translation
    pub hole_edges: Vec<EdgeSpec>,
}

impl Default for BackplateConfig {
    fn default() -> Self {
        let plain = EdgeSpec::plain().with_overshoot(0.0);
        let toothed = EdgeSpec::default()
            .with_overshoot(0.0)
            .with_tooth_length(3.0);
        Self {
            name: "backplate_4x5".to_string(),
            division_length: 8.0,
            origin: pt(20.0, 20.0),
            sheet: SheetSize::new(300.0, 260.0),
            holder_length: 159.5,
            holder_width: 119.5,
            film_hole_length: 121.5,
            film_hole_width: 98.0,
            exposure_field_distance: 15.0,
            holder_edges: vec![plain; 4],
            hole_edges: [false, true, false, true]
                .iter()
                .map(|&p| toothed.with_phase(p))
                .collect(),
        }
    }
}

impl BackplateConfig {
    /// Offset of the film hole from the holder origin; centred across y
    pub fn hole_offset(&self) -> Point {
        Point::new(
            self.exposure_field_distance,
            (self.holder_width - self.film_hole_width) / 2.0,
        )
    }

    pub fn validate(&self) -> PatternResult<()> {
        require_name(&self.name)?;
        require_positive("division_length", self.division_length)?;
        require_positive("sheet width", self.sheet.width_mm)?;
        require_positive("sheet height", self.sheet.height_mm)?;
        if self.exposure_field_distance < 0.0
            || self.exposure_field_distance + self.film_hole_length > self.holder_length
            || self.film_hole_width > self.holder_width
        {
            return Err(PatternError::InvalidConfig(format!(
                "{}: film hole {}x{} at {} does not fit holder {}x{}",
                self.name,
                self.film_hole_length,
                self.film_hole_width,
                self.exposure_field_distance,
                self.holder_length,
                self.holder_width
            )));
        }
        Ok(())
    }

    pub fn build(&self) -> PatternResult<Vec<Drawing>> {
        self.validate()?;
        let holder = rectangle(self.origin, self.holder_length, self.holder_width)?;
        let hole = rectangle(self.origin, self.film_hole_length, self.film_hole_width)?;

        let offset = self.hole_offset();
        debug!(name = %self.name, x = offset.x, y = offset.y, "film hole offset");
        let hole_edges = self
            .hole_edges
            .iter()
            .map(|e| e.with_translation(e.translation + offset))
            .collect();

        let mut drawing = Drawing::new(self.name.clone(), self.sheet);
        drawing.add_panel(
            &Panel::new(format!("{}_holder", self.name), holder, self.division_length)
                .with_edges(self.holder_edges.clone()),
        )?;
        drawing.add_panel(
            &Panel::new(format!("{}_hole", self.name), hole, self.division_length)
                .with_edges(hole_edges),
        )?;
        Ok(vec![drawing])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backplate() {
        let config = BackplateConfig::default();
        assert_eq!(config.hole_offset(), Point::new(15.0, 10.75));

        let drawings = config.build().unwrap();
        assert_eq!(drawings.len(), 1);
        let drawing = &drawings[0];
        assert_eq!(drawing.name, "backplate_4x5");
        assert_eq!(drawing.polylines.len(), 8);
        // holder edges are single segments
        assert!(drawing.polylines[..4].iter().all(|l| l.len() == 2));
        // hole edges are toothed
        assert!(drawing.polylines[4..].iter().all(|l| l.len() > 2));
        assert_eq!(drawing.polylines[0][0], Point::new(20.0, 139.5));
    }

    #[test]
    fn test_hole_stays_inside_holder() {
        let drawing = &BackplateConfig::default().build().unwrap()[0];
        for point in drawing.polylines[4..].iter().flatten() {
            assert!(point.x > 20.0 && point.x < 179.5, "{point:?}");
            assert!(point.y > 20.0 && point.y < 139.5, "{point:?}");
        }
    }

    #[test]
    fn test_oversized_hole_is_rejected() {
        let config = BackplateConfig {
            film_hole_length: 150.0,
            ..BackplateConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(PatternError::InvalidConfig(_))
        ));
    }
}
