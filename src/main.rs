//! Post Grid - Entry Point

use clap::Parser;
use postgrid::config::CliOverrides;
use postgrid::model::AppError;
use postgrid::view::{ColorConfig, LaunchOptions};
use std::path::PathBuf;
use tracing::info;

/// Post Grid - browse, filter, sort and page through a JSON post collection
#[derive(Parser, Debug)]
#[command(name = "postgrid")]
#[command(version)]
#[command(about = "TUI for browsing a JSON collection of posts as a grid or tiles")]
pub struct Args {
    /// Endpoint serving the post collection
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the collection from a local JSON file instead of the network
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Initial grid page size (5, 10, 20, 30, 40, 50 or 100)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Initial tile page size (5, 10, 20, 30, 40 or 50)
    #[arg(long)]
    pub tile_page_size: Option<usize>,

    /// Initial view mode
    #[arg(long, value_parser = ["grid", "tile", "tiles"])]
    pub mode: Option<String>,

    /// Start with this global filter applied
    #[arg(long)]
    pub filter: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            url: self.url.clone(),
            grid_page_size: self.page_size,
            tile_page_size: self.tile_page_size,
            default_mode: self.mode.clone(),
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = postgrid::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = postgrid::config::merge_config(config_file)?;

        // 3. Apply environment variable overrides
        let with_env = postgrid::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        postgrid::config::apply_cli_overrides(with_env, args.cli_overrides())?
    };

    postgrid::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = postgrid::source::detect_record_source(
        config.url.clone(),
        args.file.clone(),
        config.request_timeout,
    );

    let options = LaunchOptions {
        grid_page_size: config.grid_page_size,
        tile_page_size: config.tile_page_size,
        mode: config.default_mode,
        filter: args.filter.clone(),
        color: ColorConfig::from_env_and_args(args.no_color),
    };

    postgrid::view::run_with_source(source, options)?;

    Ok(())
}
