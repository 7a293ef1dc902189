//! The layout engine: plan, draw, encode.

/// Composite entry points.
pub mod engine;
/// Style options and canvas limits.
pub mod style;
