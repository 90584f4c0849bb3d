// src/bin/clean.rs
use clap::Parser;
use tm_scrape::cli::{self, CleanArgs};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::clean(&CleanArgs::parse())?;
    Ok(())
}
