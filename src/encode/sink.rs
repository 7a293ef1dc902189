use std::path::{Path, PathBuf};

use crate::encode::raster::EncodedImage;
use crate::foundation::error::{CollageError, CollageResult};
use crate::template::registry::TemplateId;

/// Destination for finished composites (a download folder, a response body, ...).
pub trait ImageSink: Send {
    /// Deliver `image` under `name`; returns where it ended up, if it has a location.
    fn write(&mut self, name: &str, image: &EncodedImage) -> CollageResult<Option<PathBuf>>;
}

/// Writes images into a directory, creating it on demand.
#[derive(Clone, Debug)]
pub struct FileSink {
    dir: PathBuf,
    overwrite: bool,
}

impl FileSink {
    /// Sink writing into `dir`; existing files are overwritten.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: true,
        }
    }

    /// Refuse to replace existing files when `overwrite` is false.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl ImageSink for FileSink {
    fn write(&mut self, name: &str, image: &EncodedImage) -> CollageResult<Option<PathBuf>> {
        let path = self.dir.join(name);
        if !self.overwrite && path.exists() {
            return Err(CollageError::io(format!(
                "output file '{}' already exists",
                path.display()
            )));
        }
        ensure_parent_dir(&path)?;
        std::fs::write(&path, &image.bytes)
            .map_err(|e| CollageError::io(format!("write '{}': {e}", path.display())))?;
        tracing::info!(path = %path.display(), len = image.len(), "wrote composite");
        Ok(Some(path))
    }
}

/// Keeps images in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    images: Vec<(String, EncodedImage)>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in write order.
    pub fn images(&self) -> &[(String, EncodedImage)] {
        &self.images
    }
}

impl ImageSink for InMemorySink {
    fn write(&mut self, name: &str, image: &EncodedImage) -> CollageResult<Option<PathBuf>> {
        self.images.push((name.to_owned(), image.clone()));
        Ok(None)
    }
}

/// Default download name: `merged-<template>-<unix millis>.<ext>`.
pub fn download_file_name(template: TemplateId, unix_millis: u128, image: &EncodedImage) -> String {
    format!(
        "merged-{template}-{unix_millis}.{}",
        image.format.extension()
    )
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> CollageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CollageError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
