// --- File: crates/carebook_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use models::*;

/// Prefix of environment overrides, e.g. `CAREBOOK__SERVER__PORT`.
pub const ENV_PREFIX: &str = "CAREBOOK";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, `{CONFIG_DIR}/default.*`,
/// `{CONFIG_DIR}/{RUN_ENV}.*` and `CAREBOOK__*` environment variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    load_config_from(Path::new(&config_dir), &run_env)
}

/// Loads the configuration from an explicit directory and run environment.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigError> {
    let default_path: PathBuf = config_dir.join("default");
    let env_path: PathBuf = config_dir.join(run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file defaults to `.env`; `DOTENV_OVERRIDE` points at another one.
/// Loading happens once per process, a missing file is not an error.
/// Returns the path that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_config_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("carebook-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = temp_config_dir("empty");
        let config = load_config_from(&dir, "debug").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.booking.redirect_delay_ms, 2000);
        assert!(config.booking.cancel_redirect_on_leave);
        assert!(!config.booking.clear_time_on_date_change);
        assert_eq!(config.notifications.limit, 1);
        assert_eq!(config.session.cookie_name, "carebook_session");
    }

    #[test]
    fn test_run_env_file_overrides_default_file() {
        let dir = temp_config_dir("layered");
        fs::write(
            dir.join("default.toml"),
            "[server]\nport = 9000\n[booking]\ntime_zone = \"Europe/Zurich\"\n",
        )
        .unwrap();
        fs::write(dir.join("release.toml"), "[server]\nport = 9100\n").unwrap();

        let config = load_config_from(&dir, "release").unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.booking.time_zone, "Europe/Zurich");
        // untouched sections keep their defaults
        assert_eq!(config.booking.redirect_delay_ms, 2000);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let json = r#"{ "booking": { "redirect_delay_ms": 10 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.booking.redirect_delay_ms, 10);
        assert_eq!(config.booking.time_zone, "UTC");
        assert!(config.booking.enforce_required_fields);
    }
}
