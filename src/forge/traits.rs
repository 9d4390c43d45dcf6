//! Traits related to the remote forge.
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        types::{Comparison, ForgeRelease},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    /// Remote connection configuration for this client.
    fn remote_config(&self) -> RemoteConfig;

    /// Latest published non-prerelease release, if any exists.
    async fn get_latest_release(&self) -> Result<Option<ForgeRelease>>;

    /// Commits and file changes between two refs, in upstream order.
    async fn compare_refs(&self, base: &str, head: &str)
    -> Result<Comparison>;
}
