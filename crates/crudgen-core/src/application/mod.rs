//! Application layer: orchestration of one scaffolding run.
//!
//! Defines the driven ports (what the run needs from the outside world) and
//! the [`ScaffoldService`] that walks the artifact sequence. No I/O happens
//! here directly; everything goes through the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::ScaffoldService;
