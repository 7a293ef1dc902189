//! Output side: raster encoding and delivery.

/// JPEG/PNG encoding of the finished canvas.
pub mod raster;
/// Where encoded composites go.
pub mod sink;
