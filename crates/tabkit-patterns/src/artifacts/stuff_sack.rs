//! Stuff sack sewing patterns.
//!
//! Four sheets: the body wrap, the sewn end caps, a gored sleeve with its
//! caps, and the rigid rings with their strips. No edge on these sheets is
//! toothed.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tabkit_core::Point;

use super::{pt, require_name, require_positive};
use crate::assembly::{Drawing, SheetSize};
use crate::error::{PatternError, PatternResult};
use crate::polygon::{gored_rectangle, rectangle};

pub const MM_PER_INCH: f64 = 25.4;

/// Cylindrical sleeve with gored seam allowances and its two end caps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoredSleeve {
    pub origin: Point,
    pub radius: f64,
    pub height: f64,
    pub overlap: f64,
    pub gores: u32,
    pub cap_centers: Vec<Point>,
}

/// Straight stiffening strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strip {
    pub origin: Point,
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub length: f64,
}

/// Annular ring drawn as two concentric circles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub center: Point,
    pub outer_radius: f64,
    pub wall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StuffSackConfig {
    pub name: String,
    /// Sheet for the body and end caps
    pub fabric_sheet: SheetSize,
    /// Sheet for the sleeve and the rings
    pub parts_sheet: SheetSize,
    pub diameter: f64,
    pub length: f64,
    /// Seam allowance around the body and the end caps
    pub overlap: f64,
    pub body_origin: Point,
    pub end_cap_centers: Vec<Point>,
    pub sleeve: GoredSleeve,
    pub strips: Vec<Strip>,
    pub rings: Vec<Ring>,
}

impl Default for StuffSackConfig {
    fn default() -> Self {
        let rings_radius = 50.0;
        Self {
            name: "stuff_sack".to_string(),
            fabric_sheet: SheetSize::new(600.0, 300.0),
            parts_sheet: SheetSize::new(450.0, 300.0),
            diameter: 6.0 * MM_PER_INCH,
            length: 8.0 * MM_PER_INCH,
            overlap: 0.5 * MM_PER_INCH,
            body_origin: pt(5.0, 5.0),
            end_cap_centers: vec![pt(100.0, 90.0), pt(300.0, 90.0)],
            sleeve: GoredSleeve {
                origin: pt(5.0, 140.0),
                radius: rings_radius,
                height: 100.0,
                overlap: 12.7,
                gores: 40,
                cap_centers: vec![pt(85.0, 55.0), pt(230.0, 55.0)],
            },
            strips: vec![
                Strip {
                    origin: pt(5.0, 5.0),
                    width: 12.7,
                    length: 120.0,
                },
                Strip {
                    origin: pt(30.0, 5.0),
                    width: 12.7,
                    length: 120.0,
                },
            ],
            rings: vec![
                Ring {
                    center: pt(100.0, 55.0),
                    outer_radius: rings_radius,
                    wall: 12.7,
                },
                Ring {
                    center: pt(220.0, 55.0),
                    outer_radius: rings_radius,
                    wall: 13.2,
                },
            ],
        }
    }
}

impl StuffSackConfig {
    /// Body wrap extent along x: the circumference including seam allowance
    pub fn body_circumference(&self) -> f64 {
        PI * (2.0 * self.overlap + self.diameter)
    }

    pub fn end_cap_radius(&self) -> f64 {
        self.diameter / 2.0 + self.overlap
    }

    pub fn validate(&self) -> PatternResult<()> {
        require_name(&self.name)?;
        require_positive("diameter", self.diameter)?;
        require_positive("length", self.length)?;
        require_positive("sleeve radius", self.sleeve.radius)?;
        if !(self.overlap.is_finite() && self.overlap >= 0.0) {
            return Err(PatternError::InvalidConfig(format!(
                "overlap must be >= 0, got {}",
                self.overlap
            )));
        }
        for ring in &self.rings {
            if !(ring.wall > 0.0 && ring.wall < ring.outer_radius) {
                return Err(PatternError::InvalidConfig(format!(
                    "ring at ({}, {}): wall {} must lie between 0 and radius {}",
                    ring.center.x, ring.center.y, ring.wall, ring.outer_radius
                )));
            }
        }
        Ok(())
    }

    pub fn build(&self) -> PatternResult<Vec<Drawing>> {
        self.validate()?;
        let sheet_name = |part: &str| format!("{}_{}", self.name, part);

        let mut body = Drawing::new(sheet_name("body"), self.fabric_sheet);
        body.add_outline(&rectangle(
            self.body_origin,
            self.body_circumference(),
            self.length + 2.0 * self.overlap,
        )?);

        let mut end_caps = Drawing::new(sheet_name("end_caps"), self.fabric_sheet);
        for &center in &self.end_cap_centers {
            end_caps.add_circle(center, self.end_cap_radius())?;
        }

        let mut sleeve = Drawing::new(sheet_name("sleeve"), self.parts_sheet);
        for &center in &self.sleeve.cap_centers {
            sleeve.add_circle(center, self.sleeve.radius)?;
        }
        sleeve.add_outline(&gored_rectangle(
            self.sleeve.origin,
            2.0 * PI * self.sleeve.radius,
            self.sleeve.height,
            self.sleeve.overlap,
            self.sleeve.gores,
        )?);

        let mut rings = Drawing::new(sheet_name("rings"), self.parts_sheet);
        for strip in &self.strips {
            rings.add_outline(&rectangle(strip.origin, strip.width, strip.length)?);
        }
        for ring in &self.rings {
            rings.add_circle(ring.center, ring.outer_radius)?;
            rings.add_circle(ring.center, ring.outer_radius - ring.wall)?;
        }

        Ok(vec![body, end_caps, sleeve, rings])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stuff_sack_sheets() {
        let drawings = StuffSackConfig::default().build().unwrap();
        let names: Vec<_> = drawings.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            ["stuff_sack_body", "stuff_sack_end_caps", "stuff_sack_sleeve", "stuff_sack_rings"]
        );

        let body = &drawings[0];
        assert_eq!(body.polylines.len(), 1);
        assert_eq!(body.segment_count(), 4);
        let xs: Vec<f64> = body.polylines[0].iter().map(|p| p.x).collect();
        let max_x = xs.iter().cloned().fold(f64::MIN, f64::max);
        assert!((max_x - 5.0 - PI * 7.0 * MM_PER_INCH).abs() < 1e-9);

        assert_eq!(drawings[1].circles.len(), 2);
        assert!((drawings[1].circles[0].radius - 3.5 * MM_PER_INCH).abs() < 1e-9);

        assert_eq!(drawings[2].circles.len(), 2);
        assert_eq!(drawings[2].polylines.len(), 1);
        assert_eq!(drawings[2].segment_count(), 6 * 40 + 4);

        assert_eq!(drawings[3].polylines.len(), 2);
        assert_eq!(drawings[3].circles.len(), 4);
        assert!((drawings[3].circles[3].radius - 36.8).abs() < 1e-9);
    }

    #[test]
    fn test_ring_wall_must_be_thinner_than_radius() {
        let mut config = StuffSackConfig::default();
        config.rings[0].wall = 60.0;
        assert!(matches!(
            config.build(),
            Err(PatternError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: StuffSackConfig =
            serde_json::from_str(r#"{"name":"small","diameter":100.0}"#).unwrap();
        assert_eq!(config.name, "small");
        assert_eq!(config.diameter, 100.0);
        assert_eq!(config.rings.len(), 2);
        assert!(config.build().is_ok());
    }
}
