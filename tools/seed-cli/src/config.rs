//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "fixtures";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Generator configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl SeedConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Where fixture files go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: fixtures).
    #[serde(default = "default_dir")]
    pub dir: String,
}

fn default_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

/// Generator settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for reproducible runs; entropy is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeedConfig::default();
        assert_eq!(config.output.dir, "fixtures");
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_load_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("seed.toml");
        std::fs::write(
            &path,
            "[output]\ndir = \"Dev Tools/Database Json\"\n\n[generator]\nseed = 42\n",
        )
        .unwrap();

        let config = SeedConfig::load(&path).unwrap();
        assert_eq!(config.output.dir, "Dev Tools/Database Json");
        assert_eq!(config.generator.seed, Some(42));
    }

    #[test]
    fn test_load_json_partial() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("seed.json");
        std::fs::write(&path, r#"{"generator": {"seed": 7}}"#).unwrap();

        let config = SeedConfig::load(&path).unwrap();
        assert_eq!(config.output.dir, DEFAULT_OUTPUT_DIR);
        assert_eq!(config.generator.seed, Some(7));
    }

    #[test]
    fn test_load_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("seed.toml");
        std::fs::write(&path, "[generator]\nseed = \"not a number\"\n").unwrap();

        let err = SeedConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
