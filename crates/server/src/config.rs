use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Listening port. The bind address is always `0.0.0.0`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the static site, including the `index.html` entry
    /// point served for unmatched routes.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Load application configuration from an optional `config.yaml` plus
/// environment overrides.
///
/// Environment variables win over file values: `PORT` overrides `port`,
/// `PUBLIC_DIR` overrides `public_dir`. Both keys fall back to defaults when
/// neither source provides them, so a bare `PORT=8080` (or nothing at all)
/// is a valid deployment.
///
/// Returns a `ConfigError` instead of panicking so the caller can decide how
/// to fail.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};
    let cfg = Config::builder()
        .add_source(File::with_name("config.yaml").required(false))
        .add_source(Environment::default())
        .build()?;

    validate(cfg.try_deserialize()?)
}

fn validate(app: AppConfig) -> Result<AppConfig, ConfigError> {
    if app.port == 0 {
        return Err(ConfigError::Validation("port must be > 0".into()));
    }
    if app.public_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "public_dir must not be empty".into(),
        ));
    }
    Ok(app)
}

/// Convenience helper for binaries wanting panic-on-error behaviour.
pub fn load_config_or_panic() -> AppConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => panic!("Failed to load configuration: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        let app = AppConfig {
            port: default_port(),
            public_dir: default_public_dir(),
        };
        let app = validate(app).unwrap();
        assert_eq!(app.port, 3000);
        assert_eq!(app.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn validate_rejects_port_zero() {
        let app = AppConfig {
            port: 0,
            public_dir: default_public_dir(),
        };
        assert!(matches!(
            validate(app),
            Err(ConfigError::Validation(msg)) if msg.contains("port")
        ));
    }

    #[test]
    fn validate_rejects_empty_public_dir() {
        let app = AppConfig {
            port: 3000,
            public_dir: PathBuf::new(),
        };
        assert!(matches!(
            validate(app),
            Err(ConfigError::Validation(msg)) if msg.contains("public_dir")
        ));
    }
}
