//! Configuration loading and typed config structures for the Path
//! Lamps service.
//!
//! The canonical configuration lives in `pathlamps.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the
//! YAML structure and provides a loader that reads the file. Every
//! field is defaulted, so an absent or empty file yields a fully
//! usable configuration.

use std::path::Path;

use serde::Deserialize;

use pathlamps_types::{IdBase, ReportMode};

use crate::simulate::SimulateOptions;

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
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `pathlamps.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Process-wide report conventions.
    #[serde(default)]
    pub report: ReportSection,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents)?)
    }

    /// Load configuration from a YAML file, falling back to the
    /// built-in defaults when the file does not exist. Read or parse
    /// failures on an existing file are still reported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be
    /// read or parsed.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`serde_yml::Error`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(yaml)
    }

    /// The simulator options this configuration selects.
    pub const fn simulate_options(&self) -> SimulateOptions {
        SimulateOptions {
            mode: self.report.mode,
            id_base: self.report.id_base,
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Report convention configuration.
///
/// Defaults reproduce the original service: full timelines with
/// 0-based individual ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportSection {
    /// Full timeline versus short-circuit tracing.
    #[serde(default)]
    pub mode: ReportMode,

    /// 0-based versus 1-based individual ids.
    #[serde(default)]
    pub id_base: IdBase,
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = AppConfig::parse("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.report.mode, ReportMode::FullTimeline);
        assert_eq!(config.report.id_base, IdBase::ZeroBased);
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let yaml = r"
server:
  port: 9000
report:
  mode: short_circuit
";
        let config = AppConfig::parse(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.report.mode, ReportMode::ShortCircuit);
        assert_eq!(config.report.id_base, IdBase::ZeroBased);
    }

    #[test]
    fn options_reflect_the_report_section() {
        let yaml = r"
report:
  mode: short_circuit
  id_base: one_based
";
        let config = AppConfig::parse(yaml).unwrap();
        let options = config.simulate_options();
        assert_eq!(options.mode, ReportMode::ShortCircuit);
        assert_eq!(options.id_base, IdBase::OneBased);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            AppConfig::from_file_or_default(Path::new("does-not-exist.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
