//! Resolves which top-level directories hold convertible assets.
use log::*;
use std::{fs, path::Path};

use crate::{
    config::{RASTER_OUTPUT_ROOT, TOOLING_DIR},
    error::Result,
};

/// Read the ignore file, one directory name per line, skipping blanks. A
/// missing file yields an empty list.
pub fn load_ignore_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        debug!("no ignore file at {}", path.display());
        return Ok(vec![]);
    }

    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// List eligible top-level directories of `root` in directory listing
/// order, excluding ignored names, hidden entries, the raster output root,
/// and the tooling directory.
pub fn resolve_directories(
    root: &Path,
    ignored: &[String],
) -> Result<Vec<String>> {
    let mut directories = vec![];

    for entry in fs::read_dir(root)? {
        let entry = entry?;

        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();

        if name.starts_with('.')
            || name == RASTER_OUTPUT_ROOT
            || name == TOOLING_DIR
            || ignored.iter().any(|ignored_name| *ignored_name == name)
        {
            continue;
        }

        directories.push(name);
    }

    Ok(directories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_ignore_list_skipping_blank_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".rasterignore");

        fs::write(&path, "extras\n\n  legacy  \n").unwrap();

        let ignored = load_ignore_list(&path).unwrap();

        assert_eq!(ignored, vec!["extras", "legacy"]);
    }

    #[test]
    fn missing_ignore_file_yields_empty_list() {
        let tmp = TempDir::new().unwrap();

        let ignored =
            load_ignore_list(&tmp.path().join(".rasterignore")).unwrap();

        assert!(ignored.is_empty());
    }

    #[test]
    fn excludes_ignored_hidden_and_reserved_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        for name in ["smileys", "animals", "extras", ".github", "png", "tools"]
        {
            fs::create_dir(root.join(name)).unwrap();
        }
        fs::write(root.join("README.md"), "readme").unwrap();

        let mut resolved =
            resolve_directories(root, &["extras".to_string()]).unwrap();
        resolved.sort();

        assert_eq!(resolved, vec!["animals", "smileys"]);
    }
}
