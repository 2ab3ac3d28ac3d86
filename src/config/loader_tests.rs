//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_postgrid_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("postgrid") && path_str.ends_with("config.toml"),
        "Path should contain 'postgrid' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_postgrid_log() {
    let path = default_log_path();
    assert!(path.ends_with("postgrid.log"), "got: {}", path.display());
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "postgrid_test_config.toml",
        r#"
url = "http://localhost:8080/posts"
grid_page_size = 20
tile_page_size = 5
default_mode = "tile"
request_timeout_secs = 15
"#,
    );

    let config = load_config_file(&path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(config) for existing file");
    let _ = fs::remove_file(&path);

    assert_eq!(config.url.as_deref(), Some("http://localhost:8080/posts"));
    assert_eq!(config.grid_page_size, Some(20));
    assert_eq!(config.tile_page_size, Some(5));
    assert_eq!(config.default_mode.as_deref(), Some("tile"));
    assert_eq!(config.request_timeout_secs, Some(15));
    assert_eq!(config.log_file_path, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp_config("postgrid_test_invalid.toml", "grid_page_size = [not valid");

    let result = load_config_file(&path);
    let _ = fs::remove_file(&path);

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should produce ParseError, got: {:?}",
        result
    );
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("postgrid_test_unknown.toml", "theme = \"dark\"\n");

    let result = load_config_file(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None).unwrap();
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.url, DEFAULT_URL);
    assert_eq!(resolved.grid_page_size, 10);
    assert_eq!(resolved.tile_page_size, 10);
    assert_eq!(resolved.default_mode, ViewMode::Grid);
    assert_eq!(resolved.request_timeout, None);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        url: Some("http://example.test/items".to_string()),
        grid_page_size: Some(100),
        tile_page_size: Some(50),
        default_mode: Some("Tiles".to_string()),
        request_timeout_secs: Some(3),
        log_file_path: Some(PathBuf::from("/tmp/pg.log")),
    };

    let resolved = merge_config(Some(file)).unwrap();

    assert_eq!(resolved.url, "http://example.test/items");
    assert_eq!(resolved.grid_page_size, 100);
    assert_eq!(resolved.tile_page_size, 50);
    assert_eq!(resolved.default_mode, ViewMode::Tile);
    assert_eq!(resolved.request_timeout, Some(Duration::from_secs(3)));
    assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/pg.log"));
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let file = ConfigFile {
        grid_page_size: Some(30),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file)).unwrap();
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.grid_page_size, 30);
    assert_eq!(resolved.url, defaults.url);
    assert_eq!(resolved.tile_page_size, defaults.tile_page_size);
    assert_eq!(resolved.default_mode, defaults.default_mode);
}

#[test]
fn merge_config_rejects_page_size_outside_options() {
    let file = ConfigFile {
        grid_page_size: Some(7),
        ..ConfigFile::default()
    };

    assert_eq!(
        merge_config(Some(file)),
        Err(ConfigError::InvalidValue {
            field: "grid_page_size",
            value: "7".to_string(),
        })
    );
}

#[test]
fn merge_config_rejects_grid_only_size_for_tiles() {
    let file = ConfigFile {
        tile_page_size: Some(100),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(file)),
        Err(ConfigError::InvalidValue {
            field: "tile_page_size",
            ..
        })
    ));
}

#[test]
fn merge_config_rejects_zero_timeout_and_unknown_mode() {
    let zero_timeout = ConfigFile {
        request_timeout_secs: Some(0),
        ..ConfigFile::default()
    };
    assert!(merge_config(Some(zero_timeout)).is_err());

    let bad_mode = ConfigFile {
        default_mode: Some("carousel".to_string()),
        ..ConfigFile::default()
    };
    assert!(matches!(
        merge_config(Some(bad_mode)),
        Err(ConfigError::InvalidValue {
            field: "default_mode",
            ..
        })
    ));
}

#[test]
fn parse_mode_accepts_aliases() {
    assert_eq!(parse_mode("grid"), Ok(ViewMode::Grid));
    assert_eq!(parse_mode(" TABLE "), Ok(ViewMode::Grid));
    assert_eq!(parse_mode("tile"), Ok(ViewMode::Tile));
    assert_eq!(parse_mode("tiles"), Ok(ViewMode::Tile));
}

#[test]
fn apply_cli_overrides_takes_highest_precedence() {
    let base = ResolvedConfig {
        url: "http://from-file".to_string(),
        grid_page_size: 20,
        ..ResolvedConfig::default()
    };

    let overrides = CliOverrides {
        url: Some("http://from-cli".to_string()),
        grid_page_size: Some(50),
        tile_page_size: None,
        default_mode: Some("tile".to_string()),
    };

    let resolved = apply_cli_overrides(base.clone(), overrides).unwrap();

    assert_eq!(resolved.url, "http://from-cli");
    assert_eq!(resolved.grid_page_size, 50);
    assert_eq!(resolved.tile_page_size, base.tile_page_size);
    assert_eq!(resolved.default_mode, ViewMode::Tile);
}

#[test]
fn apply_cli_overrides_without_flags_is_identity() {
    let base = ResolvedConfig::default();
    let resolved = apply_cli_overrides(base.clone(), CliOverrides::default()).unwrap();
    assert_eq!(resolved, base);
}

#[test]
fn apply_cli_overrides_rejects_invalid_tile_size() {
    let overrides = CliOverrides {
        tile_page_size: Some(3),
        ..CliOverrides::default()
    };
    assert!(apply_cli_overrides(ResolvedConfig::default(), overrides).is_err());
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(postgrid_url)]
fn apply_env_overrides_respects_postgrid_url() {
    let _guard = EnvGuard::new(URL_ENV_VAR);
    env::set_var(URL_ENV_VAR, "http://env.test/posts");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.url, "http://env.test/posts");
    assert_eq!(result.grid_page_size, ResolvedConfig::default().grid_page_size);
}

#[test]
#[serial(postgrid_url)]
fn apply_env_overrides_ignores_empty_url() {
    let _guard = EnvGuard::new(URL_ENV_VAR);
    env::set_var(URL_ENV_VAR, "   ");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(postgrid_url)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(URL_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(
        apply_env_overrides(base.clone()),
        base,
        "Config should be unchanged when POSTGRID_URL not set"
    );
}

#[test]
#[serial(postgrid_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let explicit = write_temp_config("postgrid_explicit.toml", "grid_page_size = 40\n");
    let from_env = write_temp_config("postgrid_from_env.toml", "grid_page_size = 5\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    let _ = fs::remove_file(&explicit);
    let _ = fs::remove_file(&from_env);

    assert_eq!(config.grid_page_size, Some(40));
}

#[test]
#[serial(postgrid_config)]
fn load_config_with_precedence_uses_env_var() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let from_env = write_temp_config("postgrid_env_only.toml", "default_mode = \"tile\"\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    let _ = fs::remove_file(&from_env);

    assert_eq!(config.default_mode.as_deref(), Some("tile"));
}

#[test]
#[serial(postgrid_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "");

    assert!(matches!(
        load_config_with_precedence(None),
        Err(ConfigError::InvalidPath(_))
    ));
}
