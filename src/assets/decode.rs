use std::sync::Arc;

use image::RgbaImage;
use rayon::prelude::*;

use crate::foundation::error::{CollageError, CollageResult};

/// A decoded, straight-alpha RGBA8 bitmap.
///
/// Cloning is cheap; the pixels are shared and never mutated by the compositor.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    pixels: Arc<RgbaImage>,
}

impl DecodedImage {
    /// Wrap an already decoded buffer. Zero-sized buffers are rejected.
    pub fn from_rgba(pixels: RgbaImage) -> CollageResult<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CollageError::decode(format!(
                "image has zero size ({width}x{height})"
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Borrow the pixel buffer.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Decode encoded image bytes (any format `image` was built with) into RGBA8.
pub fn decode_image(bytes: &[u8]) -> CollageResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| CollageError::decode(format!("decode image from memory: {e}")))?;
    DecodedImage::from_rgba(dyn_img.to_rgba8())
}

/// Decode every source concurrently.
///
/// Results are indexed by submission order, whatever order the decodes finish in.
pub fn decode_all<S>(sources: &[S]) -> Vec<CollageResult<DecodedImage>>
where
    S: AsRef<[u8]> + Sync,
{
    sources
        .par_iter()
        .map(|bytes| decode_image(bytes.as_ref()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
