//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use crudgen_core::{application::ports::Filesystem, error::Result};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> crudgen_core::error::Error {
    use crudgen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_probe_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("app/Http/Controllers");
        let file = nested.join("PostController.php");

        assert!(!fs.exists(&file));
        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, "<?php\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "<?php\n");
    }

    #[test]
    fn write_into_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = dir.path().join("does/not/exist/File.php");

        assert!(fs.write_file(&file, "x").is_err());
    }
}
