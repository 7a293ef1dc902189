//! Pixel drawing for composites and template previews.

/// The composite canvas.
pub mod canvas;
/// Template thumbnails.
pub mod preview;
