//! Configuration for tabkit
//!
//! A single file holds the output preferences and one section per artifact.
//! Every section falls back to the built-in calibration values when it is
//! missing, so a config only needs to list what it changes. JSON and TOML are
//! both accepted; the format follows the file extension.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tabkit_patterns::{
    ArtifactKind, BackplateConfig, Drawing, FrustumPattern, StuffSackConfig,
};
use tabkit_render::RenderSettings;
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Where and how drawings are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub render: RenderSettings,
    /// Replaces `render` for the listed artifacts
    pub per_artifact: BTreeMap<ArtifactKind, RenderSettings>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        // Bellows sheets are cut in black, everything else in red.
        let bellows = RenderSettings {
            stroke_color: "rgb(0,0,0)".to_string(),
            ..RenderSettings::default()
        };
        Self {
            directory: PathBuf::from("."),
            render: RenderSettings::default(),
            per_artifact: BTreeMap::from([(ArtifactKind::Bellows, bellows)]),
        }
    }
}

impl OutputSettings {
    /// Stroke settings used for `kind`'s sheets
    pub fn render_for(&self, kind: ArtifactKind) -> &RenderSettings {
        self.per_artifact.get(&kind).unwrap_or(&self.render)
    }
}

fn validate_render(key: &str, render: &RenderSettings) -> SettingsResult<()> {
    if !(render.stroke_width.is_finite() && render.stroke_width > 0.0) {
        return Err(SettingsError::InvalidSetting {
            key: format!("{}.stroke_width", key),
            reason: format!("must be > 0, got {}", render.stroke_width),
        });
    }
    if render.stroke_color.trim().is_empty() {
        return Err(SettingsError::InvalidSetting {
            key: format!("{}.stroke_color", key),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Complete tabkit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSettings,
    pub bellows: FrustumPattern,
    pub film_holder: FrustumPattern,
    pub backplate: BackplateConfig,
    pub stuff_sack: StuffSackConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputSettings::default(),
            bellows: FrustumPattern::bellows(),
            film_holder: FrustumPattern::film_holder_4x5(),
            backplate: BackplateConfig::default(),
            stuff_sack: StuffSackConfig::default(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/tabkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("tabkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        validate_render("output.render", &self.output.render)?;
        for (kind, render) in &self.output.per_artifact {
            validate_render(&format!("output.per_artifact.{}", kind), render)?;
        }

        self.bellows.validate()?;
        self.film_holder.validate()?;
        self.backplate.validate()?;
        self.stuff_sack.validate()?;
        Ok(())
    }

    /// Drawings for one artifact
    pub fn build(&self, kind: ArtifactKind) -> SettingsResult<Vec<Drawing>> {
        let drawings = match kind {
            ArtifactKind::Bellows => self.bellows.build(),
            ArtifactKind::FilmHolder => self.film_holder.build(),
            ArtifactKind::Backplate => self.backplate.build(),
            ArtifactKind::StuffSack => self.stuff_sack.build(),
        }?;
        Ok(drawings)
    }
}
