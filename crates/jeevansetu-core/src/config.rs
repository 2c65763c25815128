//! Configuration loading and typed config structures for the dashboard.
//!
//! The configuration lives in `jeevansetu-config.yaml` in the working
//! directory. Every field has a default, so the file is optional and may
//! be partial. A handful of environment variables override the file for
//! container deployments.

use std::path::Path;

use serde::Deserialize;

/// Smallest accepted interval for any timer, in milliseconds.
pub const MIN_INTERVAL_MS: u64 = 100;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range, or an override could not be parsed.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level dashboard configuration.
///
/// Mirrors the structure of `jeevansetu-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Simulation timing.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `JEEVANSETU_HOST` overrides `server.host`
    /// - `JEEVANSETU_PORT` overrides `server.port`
    /// - `JEEVANSETU_TICK_INTERVAL_MS` overrides `simulation.tick_interval_ms`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, applying environment
    /// overrides and validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an override does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric override does not parse.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("JEEVANSETU_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("JEEVANSETU_PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::Invalid {
                reason: format!("JEEVANSETU_PORT={port}: {e}"),
            })?;
        }
        if let Some(ms) = lookup("JEEVANSETU_TICK_INTERVAL_MS") {
            self.simulation.tick_interval_ms = ms.parse().map_err(|e| ConfigError::Invalid {
                reason: format!("JEEVANSETU_TICK_INTERVAL_MS={ms}: {e}"),
            })?;
        }
        Ok(())
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if either timer is below
    /// [`MIN_INTERVAL_MS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.tick_interval_ms < MIN_INTERVAL_MS {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "simulation.tick_interval_ms must be at least {MIN_INTERVAL_MS}, got {}",
                    self.simulation.tick_interval_ms
                ),
            });
        }
        if self.simulation.reset_pause_ms < MIN_INTERVAL_MS {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "simulation.reset_pause_ms must be at least {MIN_INTERVAL_MS}, got {}",
                    self.simulation.reset_pause_ms
                ),
            });
        }
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Simulation timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Milliseconds between simulation ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Milliseconds the ticker stays suppressed after a reset.
    #[serde(default = "default_reset_pause_ms")]
    pub reset_pause_ms: u64,

    /// Seed for the bed churn generator. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            reset_pause_ms: default_reset_pause_ms(),
            seed: None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5000
}

const fn default_tick_interval_ms() -> u64 {
    10_000
}

const fn default_reset_pause_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_demo_timings() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.simulation.tick_interval_ms, 10_000);
        assert_eq!(config.simulation.reset_pause_ms, 5_000);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8088
simulation:
  tick_interval_ms: 2000
  reset_pause_ms: 1000
  seed: 7
logging:
  level: "debug"
  format: json
"#;
        let config: DashboardConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.simulation.tick_interval_ms, 2000);
        assert_eq!(config.simulation.reset_pause_ms, 1000);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: DashboardConfig = serde_yml::from_str("server:\n  port: 6000\n").unwrap();
        assert_eq!(config.server.port, 6000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.simulation.tick_interval_ms, 10_000);
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = DashboardConfig::default();
        config
            .apply_overrides(|key| match key {
                "JEEVANSETU_PORT" => Some(String::from("7000")),
                "JEEVANSETU_TICK_INTERVAL_MS" => Some(String::from("500")),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.simulation.tick_interval_ms, 500);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = DashboardConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "JEEVANSETU_PORT").then(|| String::from("not-a-port"))
        });
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn sub_minimum_interval_is_rejected() {
        let mut config = DashboardConfig::default();
        config.simulation.tick_interval_ms = 50;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let mut config = DashboardConfig::default();
        config.simulation.reset_pause_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn invalid_yaml_is_a_yaml_error() {
        let result = DashboardConfig::parse("server: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }
}
