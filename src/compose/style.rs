use serde::{Deserialize, Serialize};

use crate::encode::raster::{OutputFormat, validate_quality};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{CollageError, CollageResult};
use crate::layout::fit::FitPolicy;
use crate::render::canvas::ResampleFilter;

/// Canvas side length used when none is given.
pub const DEFAULT_CANVAS_SIZE: u32 = 1200;

/// Largest accepted canvas side length.
pub const MAX_CANVAS_SIZE: u32 = 16_384;

/// Visual and encoding options for one composite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOptions {
    /// Separate slots with a gap and outline each filled slot.
    pub show_borders: bool,
    /// Outline width in pixels.
    pub border_width: f64,
    /// Outline color.
    pub border_color: Rgba8,
    /// Encoder quality in `[0, 1]`.
    pub quality: f32,
    /// Output encoding.
    pub output_format: OutputFormat,
    /// How images are scaled into slots.
    pub fit: FitPolicy,
    /// Canvas fill behind and between images.
    pub background: Rgba8,
    /// Resampling kernel.
    pub filter: ResampleFilter,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            show_borders: true,
            border_width: 2.0,
            border_color: Rgba8::WHITE,
            quality: 0.9,
            output_format: OutputFormat::Jpeg,
            fit: FitPolicy::Cover,
            background: Rgba8::WHITE,
            filter: ResampleFilter::CatmullRom,
        }
    }
}

impl StyleOptions {
    /// Check every field that can be out of range.
    pub fn validate(&self) -> CollageResult<()> {
        validate_quality(self.quality)?;
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(CollageError::configuration(format!(
                "border_width must be a finite value >= 0, got {}",
                self.border_width
            )));
        }
        Ok(())
    }
}

/// Reject canvas sizes outside `1..=MAX_CANVAS_SIZE`.
pub fn validate_canvas_size(size: u32) -> CollageResult<()> {
    if size == 0 {
        return Err(CollageError::configuration("canvas size must be > 0"));
    }
    if size > MAX_CANVAS_SIZE {
        return Err(CollageError::configuration(format!(
            "canvas size {size} exceeds the maximum of {MAX_CANVAS_SIZE}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/style.rs"]
mod tests;
