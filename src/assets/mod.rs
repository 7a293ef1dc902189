//! Input side: decoding and file selection.

/// Byte-level image decoding.
pub mod decode;
/// Picking and loading input files.
pub mod select;
