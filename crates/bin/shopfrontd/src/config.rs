//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `shopfront.toml` in the working directory (or the file named by
//! `SHOPFRONT_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "shopfront.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory holding a built front-end bundle to serve for non-API paths.
    pub static_dir: Option<PathBuf>,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("SHOPFRONT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up by variable name; later lines win.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SHOPFRONT_HOST") {
            self.server.host = val;
        }
        // `PORT` is what hosting platforms usually inject.
        for name in ["PORT", "SHOPFRONT_PORT"] {
            if let Some(port) = var(name).and_then(|val| val.parse().ok()) {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SHOPFRONT_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SHOPFRONT_STATIC_DIR") {
            self.server.static_dir = Some(PathBuf::from(val));
        }
        if let Some(val) = var("SHOPFRONT_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("SHOPFRONT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if let Some(dir) = &self.server.static_dir
            && !dir.is_dir()
        {
            return Err(ConfigError::Validation(format!(
                "static_dir {} is not a directory",
                dir.display()
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:shopfront.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "shopfrontd=info,shopfront=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.static_dir.is_none());
        assert_eq!(config.database.url, "sqlite:shopfront.db?mode=rwc");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090
            static_dir = 'dist'

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_missing_static_dir() {
        let mut config = Config::default();
        config.server.static_dir = Some(PathBuf::from("/definitely/not/here"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_accept_existing_static_dir() {
        let mut config = Config::default();
        config.server.static_dir = Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_prefer_shopfront_port_over_platform_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PORT", "8080"), ("SHOPFRONT_PORT", "9000")]));
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn should_use_platform_port_alone() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PORT", "8080")]));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_ignore_unparseable_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PORT", "eighty")]));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_split_bind_override_into_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SHOPFRONT_BIND", "127.0.0.1:7000")]));
        assert_eq!(config.bind_addr(), "127.0.0.1:7000");
    }

    #[test]
    fn should_override_database_static_dir_and_log_filter() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("SHOPFRONT_DATABASE_URL", "sqlite::memory:"),
            ("SHOPFRONT_STATIC_DIR", "public"),
            ("SHOPFRONT_LOG", "warn"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.server.static_dir, Some(PathBuf::from("public")));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:shopfront.db?mode=rwc");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
