use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compose::style::{DEFAULT_CANVAS_SIZE, StyleOptions, validate_canvas_size};
use crate::encode::raster::OutputFormat;
use crate::foundation::error::{CollageError, CollageResult};
use crate::template::registry::TemplateId;

/// A composite described in JSON.
///
/// ```json
/// {
///   "template": "grid-4",
///   "canvas_size": 1200,
///   "inputs": ["a.jpg", "b.png"],
///   "style": { "show_borders": true, "quality": 0.9 },
///   "output": "out/merged.jpg"
/// }
/// ```
///
/// Relative `inputs` and `output` are resolved against the job file's directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositeJob {
    /// Layout template.
    pub template: TemplateId,
    /// Canvas side length in pixels.
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,
    /// Input image files, in slot order.
    pub inputs: Vec<PathBuf>,
    /// Style and encoding options.
    #[serde(default)]
    pub style: StyleOptions,
    /// Output file. Defaults to `merged-<template>-<millis>.<ext>`.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_canvas_size() -> u32 {
    DEFAULT_CANVAS_SIZE
}

impl CompositeJob {
    /// Parse a job from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CollageResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CollageError::configuration(format!("parse job JSON: {e}")))
    }

    /// Parse a job from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CollageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| CollageError::io(format!("open job JSON '{}': {e}", path.display())))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check sizes, style, inputs and output extension.
    pub fn validate(&self) -> CollageResult<()> {
        validate_canvas_size(self.canvas_size)?;
        self.style.validate()?;
        if self.inputs.is_empty() {
            return Err(CollageError::configuration("job lists no input images"));
        }
        if let Some(out) = &self.output
            && let Some(fmt) = OutputFormat::from_path(out)
            && fmt != self.style.output_format
        {
            return Err(CollageError::configuration(format!(
                "output '{}' does not match output_format {}",
                out.display(),
                self.style.output_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/job/config.rs"]
mod tests;
