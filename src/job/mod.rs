//! JSON job files: configuration and execution.

/// Job file schema.
pub mod config;
/// Running a job end to end.
pub mod runner;
