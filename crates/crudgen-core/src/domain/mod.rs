//! Core domain layer for Crudgen.
//!
//! Pure business logic: naming-convention transforms, artifact descriptions,
//! stub templates, and output-path computation. All I/O is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Derivation happens once**: `NameVariants` is computed a single time per
//!   run and reused everywhere

pub mod artifact;
pub mod error;
pub mod layout;
pub mod name;
pub mod stubs;

// Re-exports for convenience
pub use artifact::{PendingEdit, RequestKind, ScaffoldPlan, ScaffoldReport};
pub use error::DomainError;
pub use layout::ProjectLayout;
pub use name::{ModelName, NameVariants};
pub use stubs::StubContext;
