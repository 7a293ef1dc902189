use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder as _, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::foundation::error::{CollageError, CollageResult};
use crate::foundation::math::blend_over;

/// Output raster format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy JPEG; honors the quality setting.
    #[default]
    Jpeg,
    /// Lossless PNG; quality is validated but has no effect.
    Png,
}

impl OutputFormat {
    /// MIME type, as used in data URLs.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    /// Guess the format from an output path's extension.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        match image::ImageFormat::from_path(path).ok()? {
            image::ImageFormat::Jpeg => Some(OutputFormat::Jpeg),
            image::ImageFormat::Png => Some(OutputFormat::Png),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = CollageError;

    fn from_str(s: &str) -> CollageResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" | "image/jpeg" => Ok(OutputFormat::Jpeg),
            "png" | "image/png" => Ok(OutputFormat::Png),
            other => Err(CollageError::configuration(format!(
                "unsupported output format \"{other}\" (expected jpeg or png)"
            ))),
        }
    }
}

/// An encoded output image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// Encoding used for `bytes`.
    pub format: OutputFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// `data:<mime>;base64,...` form of the image.
    pub fn to_data_url(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{b64}", self.format.mime_type())
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the encoded payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reject qualities outside `[0, 1]` (NaN included).
pub fn validate_quality(quality: f32) -> CollageResult<()> {
    if !(0.0..=1.0).contains(&quality) {
        return Err(CollageError::configuration(format!(
            "quality must lie in [0, 1], got {quality}"
        )));
    }
    Ok(())
}

/// JPEG quality on the encoder's 1..=100 scale.
pub fn jpeg_quality(quality: f32) -> u8 {
    ((quality.clamp(0.0, 1.0) * 100.0).round() as u8).max(1)
}

/// Encode `pixels` as `format`.
///
/// JPEG has no alpha channel: translucent pixels are flattened over opaque black, the way a
/// browser canvas exports them.
pub fn encode_rgba(
    pixels: &RgbaImage,
    format: OutputFormat,
    quality: f32,
) -> CollageResult<EncodedImage> {
    validate_quality(quality)?;
    let (width, height) = pixels.dimensions();
    let mut bytes = Vec::new();

    match format {
        OutputFormat::Jpeg => {
            let rgb: Vec<u8> = pixels
                .pixels()
                .flat_map(|p| {
                    let [r, g, b, _] = blend_over([0, 0, 0, 255], p.0);
                    [r, g, b]
                })
                .collect();
            let mut enc = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality(quality));
            enc.encode(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(|e| CollageError::encode(format!("jpeg: {e}")))?;
        }
        OutputFormat::Png => {
            PngEncoder::new(&mut bytes)
                .write_image(pixels.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|e| CollageError::encode(format!("png: {e}")))?;
        }
    }

    tracing::debug!(%format, width, height, len = bytes.len(), "encoded composite");
    Ok(EncodedImage {
        format,
        width,
        height,
        bytes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/raster.rs"]
mod tests;
