//! Configuration module.
//!
//! Settings resolve through defaults, an optional TOML file, environment
//! variables and finally command-line flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, parse_mode, CliOverrides,
    ConfigError, ConfigFile, ResolvedConfig,
};
