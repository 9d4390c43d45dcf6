//! Subcommand implementations.
pub mod rasterize;
pub mod release_notes;
