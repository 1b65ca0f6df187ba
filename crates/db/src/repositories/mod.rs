//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod log_repo;
pub mod orchestrator_repo;

pub use log_repo::LogRepo;
pub use orchestrator_repo::OrchestratorRepo;
