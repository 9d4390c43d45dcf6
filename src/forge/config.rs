//! Configuration for the remote repository connection.
use secrecy::SecretString;

use crate::{
    error::Result,
    forge::{github::Github, traits::Forge},
};

/// Remote repository connection configuration for authenticating and
/// interacting with the hosting platform.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Full repository path.
    pub path: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Base URL for raw file links embedded in release notes.
    pub raw_link_base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "".to_string(),
            scheme: "".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            path: "".to_string(),
            token: SecretString::from("".to_string()),
            raw_link_base_url: "".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// Supported hosting platforms.
pub enum Remote {
    Github(RemoteConfig),
}

impl Remote {
    /// Create a forge client instance for the configured platform.
    pub fn get_forge(&self) -> Result<Box<dyn Forge>> {
        match self {
            Remote::Github(config) => {
                let forge = Github::new(config.clone())?;
                Ok(Box::new(forge))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_remote_config() {
        let remote = RemoteConfig::default();
        assert!(remote.host.is_empty());
        assert!(remote.raw_link_base_url.is_empty());
    }
}
