//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{
            ChangeStatus, CommitAuthor, Comparison, FileDiff, ForgeCommit,
            ForgeRelease,
        },
    },
};

#[derive(Debug, Deserialize)]
struct LatestReleaseResponse {
    tag_name: String,
}

#[derive(Debug, Deserialize)]
struct CompareAuthor {
    login: String,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct CompareCommitDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CompareCommit {
    commit: CompareCommitDetail,
    author: Option<CompareAuthor>,
}

#[derive(Debug, Deserialize)]
struct CompareFile {
    filename: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct CompareResponse {
    commits: Vec<CompareCommit>,
    files: Option<Vec<CompareFile>>,
}

/// GitHub forge implementation using Octocrab for release lookups and
/// two-ref comparisons.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and
    /// API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = format!("{}://api.{}", config.scheme, config.host);
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_latest_release(&self) -> Result<Option<ForgeRelease>> {
        let endpoint = format!(
            "{}/repos/{}/{}/releases/latest",
            self.base_uri, self.config.owner, self.config.repo
        );

        // the latest-release endpoint already excludes prereleases and drafts
        let result: std::result::Result<
            LatestReleaseResponse,
            octocrab::Error,
        > = self.instance.get(endpoint, None::<&()>).await;

        match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                info!(
                    "no published release found for {}",
                    self.config.path
                );
                Ok(None)
            }
            Err(err) => Err(err.into()),
            Ok(release) => Ok(Some(ForgeRelease {
                tag_name: release.tag_name,
            })),
        }
    }

    async fn compare_refs(
        &self,
        base: &str,
        head: &str,
    ) -> Result<Comparison> {
        let endpoint = format!(
            "{}/repos/{}/{}/compare/{}...{}",
            self.base_uri, self.config.owner, self.config.repo, base, head
        );

        info!("comparing {} against {}", head, base);

        let response: CompareResponse =
            self.instance.get(endpoint, None::<&()>).await?;

        let commits = response
            .commits
            .into_iter()
            .map(|c| ForgeCommit {
                message: c.commit.message,
                author: c.author.map(|a| CommitAuthor {
                    login: a.login,
                    profile_url: a.html_url,
                }),
            })
            .collect();

        let files = response
            .files
            .unwrap_or_default()
            .into_iter()
            .map(|f| FileDiff {
                status: ChangeStatus::parse(&f.status),
                path: f.filename,
            })
            .collect();

        Ok(Comparison { commits, files })
    }
}
