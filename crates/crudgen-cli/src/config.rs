//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The CLI
//! layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `CRUDGEN_*` environment variables (e.g. `CRUDGEN_PATHS__APP`)
//! 3. Config file: `--config FILE`, else `.crudgen.toml` in the current
//!    directory, else the platform config dir
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the scaffolded files land inside the host project.
    pub paths: PathsConfig,
    /// How the framework generators are invoked.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Application root, relative to the project root.
    pub app: String,
    /// Test root, relative to the project root.
    pub tests: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            app: "app".into(),
            tests: "tests".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// PHP interpreter used to run `artisan`.
    pub php_binary: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            php_binary: "php".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when present
    /// it must exist and parse. The fallback locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.clone())),
            None => builder
                .add_source(File::from(Self::config_path()).required(false))
                .add_source(File::with_name(".crudgen").required(false)),
        };

        let merged = builder
            .add_source(Environment::with_prefix("CRUDGEN").separator("__"))
            .build()?;

        Ok(merged.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudgen", "crudgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudgen.toml"))
    }
}
