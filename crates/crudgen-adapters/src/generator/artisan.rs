//! Generator adapter that shells out to `php artisan`.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crudgen_core::{
    application::{ApplicationError, ports::Generator},
    error::Result,
};

/// Production generator: spawns the host project's `artisan` commands.
///
/// Commands run with the project root as working directory so `artisan`
/// resolves the way it would for a developer in a shell. Output is captured,
/// not streamed; on failure the command's stderr ends up in the error.
#[derive(Debug, Clone)]
pub struct ArtisanGenerator {
    project_root: PathBuf,
    php_binary: String,
}

impl ArtisanGenerator {
    /// Create a generator rooted at the host project directory.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            php_binary: "php".into(),
        }
    }

    /// Override the PHP interpreter (e.g. `php8.3`, or an absolute path).
    pub fn with_php_binary(mut self, binary: impl Into<String>) -> Self {
        self.php_binary = binary.into();
        self
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let rendered = format!("{} artisan {}", self.php_binary, args.join(" "));
        debug!(command = %rendered, "invoking framework generator");

        let output = Command::new(&self.php_binary)
            .arg("artisan")
            .args(args)
            .current_dir(&self.project_root)
            .output()
            .map_err(|e| ApplicationError::Generator {
                command: rendered.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("exit status {}", output.status),
                detail => detail.to_string(),
            };
            return Err(ApplicationError::Generator {
                command: rendered,
                reason,
            }
            .into());
        }

        Ok(())
    }
}

impl Generator for ArtisanGenerator {
    fn make_model(&self, class_name: &str) -> Result<()> {
        self.run(&["make:model", class_name, "-m"])
    }

    fn make_resource(&self, class_name: &str) -> Result<()> {
        self.run(&["make:resource", class_name])
    }

    fn make_factory(&self, class_name: &str, model: &str) -> Result<()> {
        let model_flag = format!("--model={model}");
        self.run(&["make:factory", class_name, &model_flag])
    }

    fn make_annotation(&self, model: &str) -> Result<()> {
        self.run(&["make:annotation", model])
    }
}
