//! Release-note pipeline: diff classification, contributor collection,
//! Markdown rendering, and asset staging.
pub mod assets;
pub mod builder;
pub mod contributors;
pub mod stage;
