//! Collects deduplicated commit authors for the contributor section.
use std::collections::HashSet;

use crate::{config::MAINTAINER_LOGIN, forge::types::ForgeCommit};

/// One distinct commit author, first-seen order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub handle: String,
    pub profile_url: String,
}

/// Extract distinct authors from commits. Commits with no resolvable author
/// are dropped, as is the maintainer login.
pub fn collect(commits: &[ForgeCommit]) -> Vec<Contributor> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut contributors = vec![];

    for commit in commits {
        let Some(author) = &commit.author else {
            continue;
        };

        if author.login == MAINTAINER_LOGIN {
            continue;
        }

        if seen.insert(author.login.clone()) {
            contributors.push(Contributor {
                handle: author.login.clone(),
                profile_url: author.profile_url.clone(),
            });
        }
    }

    contributors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::types::CommitAuthor;

    fn commit(login: Option<&str>) -> ForgeCommit {
        ForgeCommit {
            message: "Add grinning face".to_string(),
            author: login.map(|login| CommitAuthor {
                login: login.to_string(),
                profile_url: format!("https://github.com/{login}"),
            }),
        }
    }

    #[test]
    fn deduplicates_by_login_preserving_first_seen_order() {
        let commits = vec![
            commit(Some("bob")),
            commit(Some("alice")),
            commit(Some("bob")),
        ];

        let contributors = collect(&commits);

        assert_eq!(contributors.len(), 2);
        assert_eq!(contributors[0].handle, "bob");
        assert_eq!(contributors[1].handle, "alice");
    }

    #[test]
    fn excludes_the_maintainer_login() {
        let commits = vec![commit(Some(MAINTAINER_LOGIN))];

        assert!(collect(&commits).is_empty());
    }

    #[test]
    fn drops_commits_without_a_resolvable_author() {
        let commits = vec![commit(None), commit(Some("alice"))];

        let contributors = collect(&commits);

        assert_eq!(contributors.len(), 1);
        assert_eq!(contributors[0].handle, "alice");
        assert_eq!(contributors[0].profile_url, "https://github.com/alice");
    }
}
