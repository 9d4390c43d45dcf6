//! Copies changed assets into the staging directory for packaging.
use log::*;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{EmojikitError, Result};

/// Copy every changed asset under `root` into `dest`, flattening directory
/// structure. The destination directory is created if absent. The first
/// failed copy aborts; files copied before it remain in place.
pub async fn stage_assets(
    root: &Path,
    asset_paths: &[String],
    dest: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dest).await?;

    let mut staged = vec![];

    for asset_path in asset_paths {
        let source = root.join(asset_path);

        let file_name = source.file_name().ok_or_else(|| {
            EmojikitError::invalid_args(format!(
                "asset path has no file name: {asset_path}"
            ))
        })?;

        let destination = dest.join(file_name);

        fs::copy(&source, &destination).await?;

        debug!(
            "staged {} -> {}",
            source.display(),
            destination.display()
        );

        staged.push(destination);
    }

    Ok(staged)
}
