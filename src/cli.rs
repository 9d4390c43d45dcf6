//! CLI argument parsing and remote repository configuration.
use clap::{Parser, Subcommand};
use color_eyre::eyre::ContextCompat;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::env;

use crate::{
    config::{DEFAULT_RASTER_SIZE, TAG_REF_PREFIX},
    error::{EmojikitError, Result},
    forge::config::{Remote, RemoteConfig},
};

/// Global CLI arguments for repository configuration and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "", global = true)]
    /// GitHub repository URL (https://github.com/owner/repo).
    pub repo: String,

    #[arg(long, default_value = "", global = true)]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub token: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Asset pipeline subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build release notes and stage changed emoji assets.
    ReleaseNotes {
        /// Ref of the triggering tag. Falls back to GITHUB_REF env var.
        #[arg(long, default_value = "")]
        tag: String,
    },

    /// Convert emoji SVG sources to PNG at a fixed pixel width.
    Rasterize {
        /// Top-level directories to convert. Defaults to every eligible
        /// directory in the working tree.
        #[arg(short, long)]
        directories: Vec<String>,

        /// Pixel width of rasterized output.
        #[arg(short, long, default_value_t = DEFAULT_RASTER_SIZE)]
        size: u32,
    },
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<Remote> {
        if self.repo.is_empty() {
            return Err(EmojikitError::missing_config("must configure a repo"));
        }

        get_github_remote(&self.repo, &self.token)
    }
}

/// Resolve the triggering tag from the CLI or the GITHUB_REF env var,
/// stripping the fully qualified ref prefix.
pub fn resolve_tag(tag: &str) -> Result<String> {
    let mut tag = tag.to_string();

    if tag.is_empty()
        && let Ok(env_var_ref) = env::var("GITHUB_REF")
    {
        tag = env_var_ref;
    }

    if tag.is_empty() {
        return Err(EmojikitError::missing_config(
            "must provide the release tag",
        ));
    }

    Ok(tag.strip_prefix(TAG_REF_PREFIX).unwrap_or(&tag).to_string())
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(EmojikitError::invalid_args(
            "only http and https schemes are supported for repo urls",
        )),
    }
}

/// Configure GitHub remote with URL parsing and token resolution.
fn get_github_remote(repo: &str, token: &str) -> Result<Remote> {
    let parsed = GitUrl::parse(repo)?;

    validate_scheme(parsed.scheme)?;

    let mut token = token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
    {
        token = env_var_token;
    }

    if token.is_empty() {
        return Err(EmojikitError::missing_config("must set github token"));
    }

    let host = parsed
        .host
        .ok_or(EmojikitError::invalid_args(
            "unable to parse host from repo url",
        ))?;

    let owner = parsed
        .owner
        .ok_or(EmojikitError::invalid_args(
            "unable to parse owner from repo url",
        ))?;

    let project_path = parsed
        .path
        .strip_prefix("/")
        .wrap_err("failed to process project path")?
        .to_string();

    let link_base_url = format!("{}://{}", parsed.scheme, host);

    let raw_link_base_url =
        format!("{}/{}/{}/raw", link_base_url, owner, parsed.name);

    let remote_config = RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        path: project_path,
        raw_link_base_url,
        token: SecretString::from(token),
    };

    Ok(Remote::Github(remote_config))
}
