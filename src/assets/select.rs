use std::fmt;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::assets::decode::{DecodedImage, decode_image};
use crate::template::registry::Template;

/// Why an input was not forwarded to the compositor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RejectReason {
    /// The path does not name an `image/*` type.
    NotAnImage,
    /// The template already had as many images as it can hold.
    TemplateFull,
    /// The file could not be read.
    Unreadable(String),
    /// The bytes are not a decodable image.
    Undecodable(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotAnImage => f.write_str("not an image file"),
            RejectReason::TemplateFull => f.write_str("template is full"),
            RejectReason::Unreadable(e) => write!(f, "unreadable: {e}"),
            RejectReason::Undecodable(e) => write!(f, "undecodable: {e}"),
        }
    }
}

/// A skipped input and the reason it was skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rejected {
    /// Input path as given.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: RejectReason,
}

/// Outcome of [`select_inputs`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Image paths to decode, in input order.
    pub accepted: Vec<PathBuf>,
    /// Everything else.
    pub rejected: Vec<Rejected>,
}

/// Outcome of [`load_images`].
#[derive(Clone, Debug, Default)]
pub struct LoadedImages {
    /// Successfully decoded images, in input order.
    pub images: Vec<DecodedImage>,
    /// Inputs that failed to read or decode.
    pub rejected: Vec<Rejected>,
}

/// MIME type implied by a path's extension, if it names a known raster format.
pub fn image_mime_type(path: &Path) -> Option<&'static str> {
    image::ImageFormat::from_path(path)
        .ok()
        .map(|f| f.to_mime_type())
        .filter(|m| m.starts_with("image/"))
}

/// Keep image inputs only, capped at the template's maximum (first come, first kept).
pub fn select_inputs<P: AsRef<Path>>(paths: &[P], template: &Template) -> Selection {
    let mut out = Selection::default();
    for path in paths {
        let path = path.as_ref();
        let reason = if image_mime_type(path).is_none() {
            RejectReason::NotAnImage
        } else if out.accepted.len() >= template.max_images {
            RejectReason::TemplateFull
        } else {
            out.accepted.push(path.to_path_buf());
            continue;
        };
        tracing::warn!(path = %path.display(), %reason, "skipping input");
        out.rejected.push(Rejected {
            path: path.to_path_buf(),
            reason,
        });
    }
    out
}

/// Read and decode `paths` concurrently, dropping (and reporting) the ones that fail.
#[tracing::instrument(skip(paths), fields(count = paths.len()))]
pub fn load_images<P: AsRef<Path> + Sync>(paths: &[P]) -> LoadedImages {
    let results: Vec<Result<DecodedImage, RejectReason>> = paths
        .par_iter()
        .map(|p| {
            let bytes = std::fs::read(p.as_ref())
                .map_err(|e| RejectReason::Unreadable(e.to_string()))?;
            decode_image(&bytes).map_err(|e| RejectReason::Undecodable(e.to_string()))
        })
        .collect();

    let mut out = LoadedImages::default();
    for (path, res) in paths.iter().zip(results) {
        match res {
            Ok(img) => out.images.push(img),
            Err(reason) => {
                let path = path.as_ref();
                tracing::warn!(path = %path.display(), %reason, "dropping input");
                out.rejected.push(Rejected {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }
    }
    tracing::debug!(decoded = out.images.len(), "inputs loaded");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/select.rs"]
mod tests;
