//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crudgen_core::application::ApplicationError;
use crudgen_core::application::ports::Filesystem;
use crudgen_core::error::Result;

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying storage, so a test can keep a handle and
/// inspect what the service wrote through its own clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, unordered.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Pre-populate a file, creating its parent directories.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.into());
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }

    fn lock_error(path: &Path) -> crudgen_core::error::Error {
        ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: "filesystem lock poisoned".into(),
        }
        .into()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        // Mirror the real filesystem: writing into a missing directory fails.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
