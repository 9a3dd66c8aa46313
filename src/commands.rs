//! Command implementations behind the `tabkit` binary.

use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use tabkit_patterns::ArtifactKind;
use tabkit_render::save_drawing;
use tabkit_settings::Config;
use tracing::info;

/// Build and write every drawing of `kinds` (all artifacts when empty)
pub fn generate(
    config: &Config,
    kinds: &[ArtifactKind],
    output: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let kinds = if kinds.is_empty() {
        &ArtifactKind::ALL[..]
    } else {
        kinds
    };

    std::fs::create_dir_all(output)
        .with_context(|| format!("creating output directory {}", output.display()))?;

    let mut written = Vec::new();
    for &kind in kinds {
        let drawings = config
            .build(kind)
            .with_context(|| format!("building {}", kind))?;
        info!(artifact = %kind, sheets = drawings.len(), "generating");

        let render = config.output.render_for(kind);
        for drawing in &drawings {
            let path = save_drawing(drawing, output, render)
                .with_context(|| format!("writing {}", drawing.name))?;
            written.push(path);
        }
    }
    Ok(written)
}

/// Write the built-in defaults to `path`
pub fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default()
        .save_to_file(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote default config");
    Ok(())
}

/// One line per artifact: name and description
pub fn list_artifacts() -> String {
    ArtifactKind::ALL
        .iter()
        .map(|kind| format!("{:<12} {}", kind.to_string(), kind.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
