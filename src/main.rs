use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabkit::commands;
use tabkit::{ArtifactKind, Config, BUILD_DATE, VERSION};
use tracing::info;

#[derive(Parser)]
#[command(name = "tabkit", version)]
#[command(about = "Finger-jointed cut patterns for laser cutters")]
struct Cli {
    /// Log as JSON lines instead of pretty text
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write SVG sheets for the named artifacts (all when none are given)
    Generate {
        /// Config file (.toml or .json); defaults to the user config if present
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory; overrides the config's output.directory
        #[arg(long, short)]
        output: Option<PathBuf>,
        artifacts: Vec<ArtifactKind>,
    },
    /// Write the built-in calibration tables to a config file
    InitConfig {
        file: PathBuf,
        #[arg(long)]
        force: bool,
    },
    /// List the artifacts tabkit can generate
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.json_logs {
        tabkit::init_json_logging()?;
    } else {
        tabkit::init_logging()?;
    }
    info!(version = VERSION, build_date = BUILD_DATE, "tabkit starting");

    match cli.command {
        Command::Generate {
            config,
            output,
            artifacts,
        } => {
            let config = Config::load_or_default(config.as_deref())?;
            let output = output.unwrap_or_else(|| config.output.directory.clone());
            let written = commands::generate(&config, &artifacts, &output)?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Command::InitConfig { file, force } => commands::init_config(&file, force)?,
        Command::List => println!("{}", commands::list_artifacts()),
    }

    Ok(())
}
