//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::SeedConfig;
use crate::output::Output;

/// Config file names searched for, nearest directory first.
const CONFIG_NAMES: [&str; 3] = ["seed.toml", ".seed.toml", "seed.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: SeedConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            SeedConfig::load(&cwd.join(path))?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd)?.unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest config file wins; one that exists but does not load is an error.
    fn find_config(start: &Path) -> Result<Option<SeedConfig>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return SeedConfig::load(&config_path).map(Some);
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Get the fixture output directory, preferring an explicit override.
    pub fn output_dir(&self, explicit: Option<&str>) -> PathBuf {
        let dir = explicit.unwrap_or(self.config.output.dir.as_str());
        self.resolve_path(dir)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(cwd: &Path) -> Context {
        Context {
            config: SeedConfig::default(),
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_output_dir_defaults_under_cwd() {
        let ctx = context_in(Path::new("/work"));
        assert_eq!(ctx.output_dir(None), PathBuf::from("/work/fixtures"));
        assert_eq!(ctx.output_dir(Some("seed")), PathBuf::from("/work/seed"));
        assert_eq!(ctx.output_dir(Some("/abs/out")), PathBuf::from("/abs/out"));
    }

    #[test]
    fn test_find_config_in_parent() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("seed.toml"), "[generator]\nseed = 99\n").unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.generator.seed, Some(99));
    }

    #[test]
    fn test_nearest_config_wins() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("seed.toml"), "[generator]\nseed = 1\n").unwrap();
        let nested = tmp.path().join("inner");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("seed.json"), r#"{"generator": {"seed": 2}}"#).unwrap();

        let config = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.generator.seed, Some(2));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("seed.toml"),
            "[output]\ndir = \"Dev Tools/Database Json\"\n\n[generator]\nseed = \"42\"\n",
        )
        .unwrap();

        let err = Context::find_config(tmp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_load_with_explicit_malformed_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ \"output\": ").unwrap();

        let result = Context::load(path.to_str(), Output::new(false, true));
        let err = result.err().unwrap();
        assert!(format!("{:#}", err).contains("Failed to parse JSON config"));
    }
}
