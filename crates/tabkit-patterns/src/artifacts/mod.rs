//! Artifact configurations
//!
//! One configuration struct per physical artifact. The defaults are the
//! calibration values the parts were cut and fitted with; several of them
//! (fudge allowances, shortened teeth on single edges, pattern shifts) were
//! tuned against hardware and have no geometric derivation.

mod backplate;
mod frustum;
mod stuff_sack;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tabkit_core::Point;

use crate::assembly::EdgeSpec;

pub use backplate::BackplateConfig;
pub use frustum::{FrustumPattern, LensMount, Segment};
pub use stuff_sack::{GoredSleeve, Ring, Strip, StuffSackConfig, MM_PER_INCH};

/// The artifacts tabkit knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Camera bellows frustum, three sheets
    Bellows,
    /// 4x5 film holder lens frustum, three sheets
    FilmHolder,
    /// 4x5 backplate with the film hole frame
    Backplate,
    /// Sewn stuff sack panels, rings and strips
    StuffSack,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Bellows,
        ArtifactKind::FilmHolder,
        ArtifactKind::Backplate,
        ArtifactKind::StuffSack,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Self::Bellows => "Unrolled bellows frustum with finger-jointed edges",
            Self::FilmHolder => "4x5 lens frustum with fudged front face",
            Self::Backplate => "4x5 backplate with toothed film hole",
            Self::StuffSack => "Sewing patterns for a cylindrical stuff sack",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bellows => write!(f, "bellows"),
            Self::FilmHolder => write!(f, "film-holder"),
            Self::Backplate => write!(f, "backplate"),
            Self::StuffSack => write!(f, "stuff-sack"),
        }
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "bellows" => Ok(Self::Bellows),
            "film-holder" | "4x5" => Ok(Self::FilmHolder),
            "backplate" => Ok(Self::Backplate),
            "stuff-sack" | "sack" => Ok(Self::StuffSack),
            _ => Err(format!("Unknown artifact: {}", s)),
        }
    }
}

/// Edge settings for one panel, in the panel polygon's edge order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelEdges {
    pub edges: Vec<EdgeSpec>,
}

impl From<Vec<EdgeSpec>> for PanelEdges {
    fn from(edges: Vec<EdgeSpec>) -> Self {
        Self { edges }
    }
}

impl PanelEdges {
    /// Copies of `template`, one per phase flag
    pub fn from_phases(phases: &[bool], template: EdgeSpec) -> Self {
        phases
            .iter()
            .map(|&p| template.with_phase(p))
            .collect::<Vec<_>>()
            .into()
    }
}

fn require_positive(name: &str, value: f64) -> crate::PatternResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::PatternError::InvalidConfig(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

fn require_name(name: &str) -> crate::PatternResult<()> {
    if name.trim().is_empty() {
        return Err(crate::PatternError::InvalidConfig(
            "artifact name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_kind_round_trip() {
        for kind in ArtifactKind::ALL {
            assert_eq!(kind.to_string().parse::<ArtifactKind>().unwrap(), kind);
        }
        assert_eq!(
            "film_holder".parse::<ArtifactKind>().unwrap(),
            ArtifactKind::FilmHolder
        );
        assert_eq!(
            "Stuff_Sack".parse::<ArtifactKind>().unwrap(),
            ArtifactKind::StuffSack
        );
        assert!("tripod".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn test_panel_edges_from_phases() {
        let edges = PanelEdges::from_phases(
            &[true, false],
            EdgeSpec::default().with_tooth_length(3.0),
        );
        assert_eq!(edges.edges.len(), 2);
        assert!(edges.edges[0].phase.is_innie());
        assert!(!edges.edges[1].phase.is_innie());
        assert!(edges.edges.iter().all(|e| e.tooth_length == 3.0));
    }
}
