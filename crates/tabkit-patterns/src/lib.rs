//! # Tabkit Patterns
//!
//! Geometry for finger-jointed cut patterns.
//!
//! ## Components
//!
//! - **Polygon Builder**: rectangles, symmetric trapezoids, unrolled open
//!   frustums and gored sleeve panels as vertex loops
//! - **Edge Toothing Engine**: turns one straight edge into a zig-zag tab
//!   polyline with flat exclusion zones near its ends
//! - **Assembly**: per-edge settings attached to each panel, collected into
//!   drawings ready for a renderer
//! - **Artifacts**: configuration for the bellows, the 4x5 film holder, its
//!   backplate and the stuff-sack panels

pub mod artifacts;
pub mod assembly;
pub mod error;
pub mod polygon;
pub mod toothing;

pub use artifacts::{
    ArtifactKind, BackplateConfig, FrustumPattern, GoredSleeve, LensMount, PanelEdges, Ring,
    Segment, Strip, StuffSackConfig, MM_PER_INCH,
};
pub use assembly::{assemble_panel, Circle, Drawing, EdgeSpec, EdgeStyle, Panel, SheetSize};
pub use error::{PatternError, PatternResult};
pub use polygon::{
    gored_rectangle, open_frustum, rectangle, slant_height, symmetric_trapezoid, FrontFudges,
    RectDims,
};
pub use toothing::{straight_line, subdivide_line, transition_positions, ToothParams, ToothedPath};
