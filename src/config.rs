//! Project-wide constants for emoji asset handling.

/// File extension of vector emoji sources.
pub const ASSET_EXTENSION: &str = "svg";
/// File extension of rasterized emoji output.
pub const RASTER_EXTENSION: &str = "png";
/// Top-level directory receiving the mirrored raster output tree.
pub const RASTER_OUTPUT_ROOT: &str = "png";
/// Directory holding project tooling, never scanned for assets.
pub const TOOLING_DIR: &str = "tools";
/// File listing directory names excluded from rasterizing, one per line.
pub const RASTER_IGNORE_FILE: &str = ".rasterignore";
/// Default pixel width for rasterized emoji.
pub const DEFAULT_RASTER_SIZE: u32 = 256;
/// Prefix of the directory changed assets are staged into.
pub const UPDATES_DIR_PREFIX: &str = "updates-";
/// Repository file embedded as the release preview image.
pub const PREVIEW_FILE: &str = "preview.png";
/// Maintainer login excluded from contributor lists.
pub const MAINTAINER_LOGIN: &str = "emojikit-bot";
/// Prefix stripped from fully qualified tag refs.
pub const TAG_REF_PREFIX: &str = "refs/tags/";
/// Fixed usage line appended below the asset change summary.
pub const USAGE_FOOTER: &str = "See [USAGE.md](./USAGE.md) for instructions on how to use these emoji in your project.";
