use clap::Parser;
use std::env;

mod cli;
mod command;
mod config;
mod error;
mod forge;
mod notes;
mod outputs;
mod raster;

use crate::error::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("emojikit")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let workdir = env::current_dir()?;

    match &cli_args.command {
        cli::Command::ReleaseNotes { tag } => {
            let tag = cli::resolve_tag(tag)?;
            let remote = cli_args.get_remote()?;
            let forge = remote.get_forge()?;
            command::release_notes::execute(forge, &tag, &workdir).await
        }
        cli::Command::Rasterize { directories, size } => {
            command::rasterize::execute(&workdir, directories, *size)
        }
    }
}
