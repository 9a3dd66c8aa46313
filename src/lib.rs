//! # Tabkit
//!
//! Generates finger-jointed cut patterns as SVG sheets for a laser cutter:
//! - Camera bellows unrolled from an open frustum
//! - The 4x5 film holder lens frustum and its backplate
//! - Sewing patterns for a stuff sack
//!
//! ## Architecture
//!
//! Tabkit is organized as a workspace with multiple crates:
//!
//! 1. **tabkit-core** - Points, edges, polygons, tab phases, error taxonomy
//! 2. **tabkit-patterns** - Polygon builders, the edge toothing engine,
//!    panel assembly and the artifact calibration tables
//! 3. **tabkit-render** - `Renderer` trait and the SVG backend
//! 4. **tabkit-settings** - JSON/TOML configuration files
//! 5. **tabkit** - Command line binary that integrates all crates

pub mod commands;

pub use tabkit_core::{Edge, GeometryError, GeometryResult, Phase, Point, Polygon, TabState};

pub use tabkit_patterns::{
    assemble_panel, gored_rectangle, open_frustum, rectangle, slant_height, straight_line,
    subdivide_line, symmetric_trapezoid, ArtifactKind, BackplateConfig, Circle, Drawing,
    EdgeSpec, EdgeStyle, FrontFudges, FrustumPattern, Panel, PatternError, RectDims, SheetSize,
    StuffSackConfig, ToothParams, ToothedPath,
};

pub use tabkit_render::{save_drawing, RenderError, RenderSettings, Renderer, SvgRenderer};

pub use tabkit_settings::{Config, OutputSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging as one JSON object per line, for scripted runs
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).json())
        .try_init()?;

    Ok(())
}
