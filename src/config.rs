//! Configuration module for Hygiene Core.
//!
//! Loads configuration from YAML files and environment variables.
//! Regulatory thresholds are constants of the engine, not settings.

use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

use crate::domain::LodMultiplier;
use crate::error::EngineResult;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Evaluation conventions chosen by the hygienist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Multiplier for non-detected samples without one of their own (0.5 or 1.0).
    #[serde(default)]
    pub default_lod_multiplier: LodMultiplier,
}

/// Output formatting for the command-line binary.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON reports.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (HYGIENE_*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    pub fn load() -> EngineResult<Self> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("HYGIENE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_yaml(yaml: &str) -> Result<Config, config::ConfigError> {
        ConfigLoader::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.engine.default_lod_multiplier, LodMultiplier::Half);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = from_yaml("{}").unwrap();
        assert_eq!(config.engine.default_lod_multiplier, LodMultiplier::Half);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_yaml_overrides() {
        let config = from_yaml(
            "engine:\n  default_lod_multiplier: 1.0\noutput:\n  pretty: false\n",
        )
        .unwrap();
        assert_eq!(config.engine.default_lod_multiplier, LodMultiplier::Full);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_invalid_multiplier_rejected() {
        let result = from_yaml("engine:\n  default_lod_multiplier: 0.25\n");
        assert!(result.is_err());
    }
}
