// src/bin/scrape.rs
use clap::Parser;
use tm_scrape::cli::{self, ScrapeArgs};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::scrape(&ScrapeArgs::parse())?;
    Ok(())
}
