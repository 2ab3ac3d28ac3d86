//! Configuration file loading with precedence handling.

use crate::source::DEFAULT_URL;
use crate::state::paginator::{DEFAULT_PAGE_SIZE, GRID_PAGE_SIZES, TILE_PAGE_SIZES};
use crate::state::ViewMode;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "POSTGRID_CONFIG";

/// Environment variable overriding the endpoint URL.
pub const URL_ENV_VAR: &str = "POSTGRID_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting has a value outside its allowed set.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Setting name as it appears in the config file.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/postgrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Endpoint serving the record collection.
    #[serde(default)]
    pub url: Option<String>,

    /// Initial grid page size.
    #[serde(default)]
    pub grid_page_size: Option<usize>,

    /// Initial tile page size.
    #[serde(default)]
    pub tile_page_size: Option<usize>,

    /// Initial view mode ("grid" or "tile").
    #[serde(default)]
    pub default_mode: Option<String>,

    /// Request timeout in seconds. Absent means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Endpoint URL.
    pub url: String,
    /// Grid page size, one of `GRID_PAGE_SIZES`.
    pub grid_page_size: usize,
    /// Tile page size, one of `TILE_PAGE_SIZES`.
    pub tile_page_size: usize,
    /// Initial view mode.
    pub default_mode: ViewMode,
    /// Optional request timeout.
    pub request_timeout: Option<Duration>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            grid_page_size: DEFAULT_PAGE_SIZE,
            tile_page_size: DEFAULT_PAGE_SIZE,
            default_mode: ViewMode::Grid,
            request_timeout: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides collected from command-line flags. `None` leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub grid_page_size: Option<usize>,
    pub tile_page_size: Option<usize>,
    pub default_mode: Option<String>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/postgrid/postgrid.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("postgrid").join("postgrid.log")
    } else {
        PathBuf::from("postgrid.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/postgrid/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("postgrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `POSTGRID_CONFIG` environment variable
/// 3. Default path `~/.config/postgrid/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for page sizes outside the offered
/// sets, unknown modes, an empty URL or a zero timeout.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let request_timeout = match config.request_timeout_secs {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                value: "0".to_string(),
            })
        }
        Some(secs) => Some(Duration::from_secs(secs)),
        None => defaults.request_timeout,
    };

    Ok(ResolvedConfig {
        url: match config.url {
            Some(url) => validate_url(url)?,
            None => defaults.url,
        },
        grid_page_size: match config.grid_page_size {
            Some(size) => validate_page_size("grid_page_size", size, GRID_PAGE_SIZES)?,
            None => defaults.grid_page_size,
        },
        tile_page_size: match config.tile_page_size {
            Some(size) => validate_page_size("tile_page_size", size, TILE_PAGE_SIZES)?,
            None => defaults.tile_page_size,
        },
        default_mode: match config.default_mode {
            Some(mode) => parse_mode(&mode)?,
            None => defaults.default_mode,
        },
        request_timeout,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `POSTGRID_URL`: Override endpoint URL (ignored when empty)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(URL_ENV_VAR) {
        if !url.trim().is_empty() {
            config.url = url;
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Same validation as [`merge_config`].
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(url) = overrides.url {
        config.url = validate_url(url)?;
    }

    if let Some(size) = overrides.grid_page_size {
        config.grid_page_size = validate_page_size("grid_page_size", size, GRID_PAGE_SIZES)?;
    }

    if let Some(size) = overrides.tile_page_size {
        config.tile_page_size = validate_page_size("tile_page_size", size, TILE_PAGE_SIZES)?;
    }

    if let Some(mode) = overrides.default_mode {
        config.default_mode = parse_mode(&mode)?;
    }

    Ok(config)
}

/// Parse a mode name ("grid", "tile" or "tiles"), case-insensitively.
pub fn parse_mode(raw: &str) -> Result<ViewMode, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "grid" | "table" => Ok(ViewMode::Grid),
        "tile" | "tiles" => Ok(ViewMode::Tile),
        _ => Err(ConfigError::InvalidValue {
            field: "default_mode",
            value: raw.to_string(),
        }),
    }
}

fn validate_page_size(
    field: &'static str,
    size: usize,
    options: &[usize],
) -> Result<usize, ConfigError> {
    if options.contains(&size) {
        Ok(size)
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value: size.to_string(),
        })
    }
}

fn validate_url(url: String) -> Result<String, ConfigError> {
    if url.trim().is_empty() {
        Err(ConfigError::InvalidValue {
            field: "url",
            value: url,
        })
    } else {
        Ok(url)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
