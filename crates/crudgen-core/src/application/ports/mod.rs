//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what a scaffolding run needs from external systems.
//! The `crudgen-adapters` crate provides the implementations.

use crate::error::Result;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `exists` is the only read operation the emitter needs: it never inspects
///   file content, only decides write-or-skip.
/// - There is no delete operation; a run never removes anything.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// Port for the host framework's own generators.
///
/// Each method corresponds to one framework command, invoked with a computed
/// class name. Implemented by:
/// - `crudgen_adapters::generator::ArtisanGenerator` (spawns `php artisan`)
/// - `crudgen_adapters::generator::RecordingGenerator` (testing)
///
/// Generator failures are fatal: there is no partial-file cleanup to attempt
/// on this side of the port, so errors propagate to the process boundary.
#[cfg_attr(test, mockall::automock)]
pub trait Generator: Send + Sync {
    /// `make:model {class} -m`: model class plus migration.
    fn make_model(&self, class_name: &str) -> Result<()>;

    /// `make:resource {class}`: API resource class.
    fn make_resource(&self, class_name: &str) -> Result<()>;

    /// `make:factory {class} --model={model}`: model factory.
    fn make_factory(&self, class_name: &str, model: &str) -> Result<()>;

    /// `make:annotation {model}`: API documentation model stub.
    fn make_annotation(&self, model: &str) -> Result<()>;
}
