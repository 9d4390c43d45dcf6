//! Plans vector-to-raster conversion jobs for one directory.
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{ASSET_EXTENSION, RASTER_EXTENSION},
    error::Result,
};

/// One planned conversion of a vector source to a raster destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub target_width: u32,
}

/// Enumerate vector files in `input` and pair each with its mirrored
/// destination under `output`, creating `output` if needed. File listing
/// order is preserved.
pub fn plan_directory(
    input: &Path,
    output: &Path,
    target_width: u32,
) -> Result<Vec<ConversionJob>> {
    fs::create_dir_all(output)?;

    let mut jobs = vec![];

    for entry in fs::read_dir(input)? {
        let entry = entry?;
        let source = entry.path();

        if !entry.file_type()?.is_file() {
            continue;
        }

        let is_vector = source
            .extension()
            .is_some_and(|ext| ext == ASSET_EXTENSION);

        if !is_vector {
            continue;
        }

        let Some(file_name) = source.file_name() else {
            continue;
        };

        let destination =
            output.join(file_name).with_extension(RASTER_EXTENSION);

        jobs.push(ConversionJob {
            source,
            destination,
            target_width,
        });
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn swaps_extension_and_mirrors_the_directory() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("smileys");
        let output = tmp.path().join("png").join("smileys");

        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("grinning.svg"), "<svg/>").unwrap();

        let jobs = plan_directory(&input, &output, 256).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].source, input.join("grinning.svg"));
        assert_eq!(jobs[0].destination, output.join("grinning.png"));
        assert_eq!(jobs[0].target_width, 256);
    }

    #[test]
    fn creates_the_output_directory() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("smileys");
        let output = tmp.path().join("png").join("smileys");

        fs::create_dir_all(&input).unwrap();

        plan_directory(&input, &output, 256).unwrap();

        assert!(output.is_dir());
    }

    #[test]
    fn skips_non_vector_files_and_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("smileys");
        let output = tmp.path().join("png").join("smileys");

        fs::create_dir_all(input.join("nested")).unwrap();
        fs::write(input.join("notes.txt"), "notes").unwrap();
        fs::write(input.join("grinning.svg"), "<svg/>").unwrap();

        let jobs = plan_directory(&input, &output, 256).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].source, input.join("grinning.svg"));
    }
}
