//! Classifies file-level diffs into emoji asset changes.
use std::path::Path;

use crate::{
    config::ASSET_EXTENSION,
    forge::types::{ChangeStatus, FileDiff},
};

/// How an asset changed relative to the previous release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Updated,
}

/// One changed emoji asset, named by its file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetChange {
    pub name: String,
    pub kind: ChangeKind,
}

fn is_asset(diff: &FileDiff) -> bool {
    diff.status != ChangeStatus::Removed
        && Path::new(&diff.path)
            .extension()
            .is_some_and(|ext| ext == ASSET_EXTENSION)
}

/// Map file diffs to asset changes, preserving diff order. Non-asset files
/// and removals are dropped.
pub fn classify(files: &[FileDiff]) -> Vec<AssetChange> {
    files
        .iter()
        .filter(|f| is_asset(f))
        .filter_map(|f| {
            let name = Path::new(&f.path).file_stem()?;

            let kind = if f.status == ChangeStatus::Added {
                ChangeKind::Added
            } else {
                ChangeKind::Updated
            };

            Some(AssetChange {
                name: name.to_string_lossy().to_string(),
                kind,
            })
        })
        .collect()
}

/// Repository-relative paths of every changed asset, in diff order.
pub fn changed_paths(files: &[FileDiff]) -> Vec<String> {
    files
        .iter()
        .filter(|f| is_asset(f))
        .map(|f| f.path.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(path: &str, status: ChangeStatus) -> FileDiff {
        FileDiff {
            path: path.to_string(),
            status,
        }
    }

    #[test]
    fn classifies_added_and_updated_assets() {
        let files = vec![
            diff("smileys/grinning.svg", ChangeStatus::Added),
            diff("smileys/winking.svg", ChangeStatus::Modified),
            diff("animals/octopus.svg", ChangeStatus::Renamed),
        ];

        let changes = classify(&files);

        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].name, "grinning");
        assert_eq!(changes[0].kind, ChangeKind::Added);
        assert_eq!(changes[1].name, "winking");
        assert_eq!(changes[1].kind, ChangeKind::Updated);
        assert_eq!(changes[2].kind, ChangeKind::Updated);
    }

    #[test]
    fn drops_removed_assets_and_non_asset_files() {
        let files = vec![
            diff("smileys/grinning.svg", ChangeStatus::Removed),
            diff("README.md", ChangeStatus::Modified),
            diff("preview.png", ChangeStatus::Added),
        ];

        assert!(classify(&files).is_empty());
        assert!(changed_paths(&files).is_empty());
    }

    #[test]
    fn preserves_diff_order() {
        let files = vec![
            diff("b/zebra.svg", ChangeStatus::Modified),
            diff("a/ant.svg", ChangeStatus::Added),
        ];

        let paths = changed_paths(&files);

        assert_eq!(paths, vec!["b/zebra.svg", "a/ant.svg"]);
    }
}
