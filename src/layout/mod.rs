//! Pure slot geometry: no pixels, no IO.

/// Image-to-slot scaling.
pub mod fit;
/// Per-call layout plans.
pub mod plan;
/// Slot rectangles per template.
pub mod slots;
