//! Batch SVG-to-PNG conversion command implementation.
use log::*;
use std::path::Path;

use crate::{
    config::{RASTER_IGNORE_FILE, RASTER_OUTPUT_ROOT},
    error::{EmojikitError, Result},
    raster::{planner, progress::ConversionProgress, render, resolver},
};

/// Convert every planned SVG under the selected directories to PNG at
/// `size` pixels wide. Jobs run strictly sequentially; the first failure
/// aborts the batch, leaving earlier output in place.
pub fn execute(root: &Path, directories: &[String], size: u32) -> Result<()> {
    let ignored =
        resolver::load_ignore_list(&root.join(RASTER_IGNORE_FILE))?;
    let allowed = resolver::resolve_directories(root, &ignored)?;

    let selected = if directories.is_empty() {
        allowed.clone()
    } else {
        validate_selection(directories, &allowed)?
    };

    let output_root = root.join(RASTER_OUTPUT_ROOT);

    for directory in &selected {
        let jobs = planner::plan_directory(
            &root.join(directory),
            &output_root.join(directory),
            size,
        )?;

        if jobs.is_empty() {
            debug!("no vector assets in {directory}");
            continue;
        }

        info!("converting {} assets in {directory}", jobs.len());

        let mut progress =
            ConversionProgress::new(jobs.len(), directory.clone());

        for job in &jobs {
            render::rasterize(job)?;

            info!(
                "converted {} -> {}",
                job.source.display(),
                job.destination.display()
            );

            progress.inc();
        }
    }

    Ok(())
}

/// Check every explicitly requested directory against the allowed set.
fn validate_selection(
    requested: &[String],
    allowed: &[String],
) -> Result<Vec<String>> {
    for name in requested {
        if !allowed.contains(name) {
            return Err(EmojikitError::invalid_args(format!(
                "unknown directory: {name}"
            )));
        }
    }

    Ok(requested.to_vec())
}
