use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::assets::select::{Rejected, load_images, select_inputs};
use crate::compose::engine::composite_planned;
use crate::encode::sink::{ImageSink, download_file_name};
use crate::foundation::error::{CollageError, CollageResult};
use crate::job::config::CompositeJob;

/// What a job run produced.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    /// Where the sink put the output, if it has a location.
    pub output: Option<PathBuf>,
    /// Name handed to the sink.
    pub file_name: String,
    /// Encoded size in bytes.
    pub bytes: usize,
    /// Images drawn into slots.
    pub placed: usize,
    /// Decoded images beyond the template capacity.
    pub dropped: usize,
    /// Inputs skipped before compositing.
    pub rejected: Vec<Rejected>,
}

/// Run `job`: pick and decode inputs, composite, hand the result to `sink`.
///
/// Inputs that are not images, overflow the template, or fail to decode are skipped and listed
/// in the report. A job left with no decodable image is a configuration error.
#[tracing::instrument(skip(job, sink), fields(template = %job.template))]
pub fn run_job(job: &CompositeJob, root: &Path, sink: &mut dyn ImageSink) -> CollageResult<JobReport> {
    job.validate()?;

    let inputs: Vec<PathBuf> = job.inputs.iter().map(|p| root.join(p)).collect();
    let selection = select_inputs(&inputs, job.template.template());
    let loaded = load_images(&selection.accepted);

    let mut rejected = selection.rejected;
    rejected.extend(loaded.rejected);

    if loaded.images.is_empty() {
        return Err(CollageError::configuration(
            "no decodable input images; nothing to composite",
        ));
    }

    let (plan, encoded) =
        composite_planned(job.template, &loaded.images, job.canvas_size, &job.style)?;

    let file_name = match &job.output {
        Some(p) => p.to_string_lossy().into_owned(),
        None => {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default();
            download_file_name(job.template, millis, &encoded)
        }
    };
    let output = sink.write(&file_name, &encoded)?;

    Ok(JobReport {
        output,
        file_name,
        bytes: encoded.len(),
        placed: plan.placements.len(),
        dropped: plan.dropped,
        rejected,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/job/runner.rs"]
mod tests;
