//! Release-note generation and asset staging command implementation.
use log::*;
use std::path::Path;

use crate::{
    config::{PREVIEW_FILE, UPDATES_DIR_PREFIX},
    error::Result,
    forge::traits::Forge,
    notes::{assets, builder, contributors, stage},
    outputs,
};

/// Diff the previous published release against `tag`, render release notes,
/// stage changed assets under `root`, and publish process outputs.
pub async fn execute(
    forge: Box<dyn Forge>,
    tag: &str,
    root: &Path,
) -> Result<()> {
    let config = forge.remote_config();

    let previous = forge.get_latest_release().await?;

    let Some(previous) = previous else {
        info!("no previous release found: nothing to compare");
        outputs::set_output("releaseNotes", "")?;
        outputs::set_output("hasSvgChanges", "false")?;
        return Ok(());
    };

    info!(
        "building release notes for {} (previous release: {})",
        tag, previous.tag_name
    );

    let comparison = forge.compare_refs(&previous.tag_name, tag).await?;

    let asset_changes = assets::classify(&comparison.files);
    let changed_paths = assets::changed_paths(&comparison.files);
    let contributors = contributors::collect(&comparison.commits);

    let messages = comparison
        .commits
        .iter()
        .map(|c| c.message.clone())
        .collect::<Vec<String>>();

    let preview_url =
        format!("{}/{}/{}", config.raw_link_base_url, tag, PREVIEW_FILE);

    let notes =
        builder::render(&preview_url, &messages, &asset_changes, &contributors);

    let has_svg_changes = !changed_paths.is_empty();

    if has_svg_changes {
        let staging_dir = root.join(format!("{UPDATES_DIR_PREFIX}{tag}"));

        info!(
            "staging {} changed assets into {}",
            changed_paths.len(),
            staging_dir.display()
        );

        stage::stage_assets(root, &changed_paths, &staging_dir).await?;
    }

    outputs::set_output("releaseNotes", &notes)?;
    outputs::set_output("hasSvgChanges", &has_svg_changes.to_string())?;

    Ok(())
}
