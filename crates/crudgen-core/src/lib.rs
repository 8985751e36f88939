//! Crudgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Crudgen
//! CRUD scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crudgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, Generator)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudgen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, ArtisanGenerator)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ModelName, NameVariants, stubs)       │
//! │         No I/O Dependencies             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudgen_core::{
//!     application::{ScaffoldService, ports::{Filesystem, Generator}},
//!     domain::{ModelName, NameVariants, ProjectLayout, ScaffoldPlan},
//! };
//!
//! # fn demo(filesystem: Box<dyn Filesystem>, generator: Box<dyn Generator>)
//! #     -> crudgen_core::error::Result<()> {
//! // 1. Derive the naming variants once
//! let model = ModelName::parse("post")?;
//! let variants = NameVariants::derive(&model);
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(ProjectLayout::default(), filesystem, generator);
//! let report = service.scaffold(&variants, ScaffoldPlan::everything())?;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Filesystem, Generator},
    };
    pub use crate::domain::{
        ModelName, NameVariants, PendingEdit, ProjectLayout, RequestKind, ScaffoldPlan,
        ScaffoldReport,
    };
    pub use crate::error::{Error, Result};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
