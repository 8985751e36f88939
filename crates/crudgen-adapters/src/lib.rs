//! Infrastructure adapters for Crudgen.
//!
//! This crate implements the ports defined in `crudgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod generator;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::{ArtisanGenerator, RecordingGenerator};
