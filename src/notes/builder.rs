//! Renders the release-note Markdown document.
//!
//! Downstream publishing depends on the exact structure produced here:
//! heading levels, the collapsible change log, and the rule that empty
//! sections are omitted entirely rather than rendered empty.
use crate::{
    config::USAGE_FOOTER,
    notes::{
        assets::{AssetChange, ChangeKind},
        contributors::Contributor,
    },
};

/// Render the full release-note document. Pure: identical inputs always
/// produce byte-identical output.
pub fn render(
    preview_url: &str,
    commit_messages: &[String],
    asset_changes: &[AssetChange],
    contributors: &[Contributor],
) -> String {
    let mut notes = String::from("## Emoji changes\n");

    if asset_changes.is_empty() {
        notes.push_str("\nNone.\n");
    } else {
        notes.push_str(&format!("\n![Release preview]({preview_url})\n"));
        push_subsection(&mut notes, "New", asset_changes, ChangeKind::Added);
        push_subsection(
            &mut notes,
            "Updated",
            asset_changes,
            ChangeKind::Updated,
        );
    }

    notes.push_str(&format!("\n{USAGE_FOOTER}\n"));

    if !contributors.is_empty() {
        notes.push_str("\n## Contributors to this release\n\n");

        for contributor in contributors {
            notes.push_str(&format!(
                "- [@{}]({})\n",
                contributor.handle, contributor.profile_url
            ));
        }
    }

    notes.push_str(
        "\n<details>\n<summary>All changes in this release</summary>\n\n",
    );

    for message in commit_messages {
        let title = message.lines().next().unwrap_or_default();
        notes.push_str(&format!("- {title}\n"));
    }

    notes.push_str("\n</details>\n");

    notes
}

/// Append one asset subsection, omitting it entirely when no change matches.
fn push_subsection(
    notes: &mut String,
    heading: &str,
    changes: &[AssetChange],
    kind: ChangeKind,
) {
    let matching = changes
        .iter()
        .filter(|c| c.kind == kind)
        .collect::<Vec<&AssetChange>>();

    if matching.is_empty() {
        return;
    }

    notes.push_str(&format!("\n### {heading}\n\n"));

    for change in matching {
        notes.push_str(&format!("- `{}`\n", change.name));
    }
}

#[cfg(test)]
#[path = "./builder_tests.rs"]
mod tests;
