//! Built-in layout templates.

/// Static template table and ids.
pub mod registry;
