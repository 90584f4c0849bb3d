// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::consts::{BASE_URL, DEFAULT_DATA_DIR};
use crate::config::{ReferenceTables, RunOptions};
use crate::core::Fetcher;
use crate::error::Result;
use crate::progress::ConsoleProgress;
use crate::{reconcile, scrape};

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory for the JSON output; checkpoints go to <DATA_DIR>/.store
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Reference tables (TOML). Defaults to the built-in tables
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    fn prepare(&self) -> Result<(RunOptions, ReferenceTables)> {
        let opts = RunOptions::default().with_data_dir(&self.data_dir);
        crate::log::init(&opts.store_dir(), self.verbose);
        let tables = ReferenceTables::load_or_builtin(self.reference.as_deref())?;
        Ok((opts, tables))
    }
}

/// Scrape every UK season and contestant page, resuming from checkpoints.
#[derive(Parser, Debug)]
#[command(name = "tm-scrape", version)]
pub struct ScrapeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Site root to fetch pages from (a mirror or local capture)
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,
}

/// Reconcile scraped data against the reference tables and rebuild the analysis.
#[derive(Parser, Debug)]
#[command(name = "tm-clean", version)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn scrape(args: &ScrapeArgs) -> Result<()> {
    let (mut opts, tables) = args.common.prepare()?;
    opts.base_url = args.base_url.clone();
    let fetcher = Fetcher::new(&opts)?;
    let mut progress = ConsoleProgress::new();

    let summary = scrape::run(&fetcher, &tables, &opts, &mut progress)?;
    logf!(
        "Scraping complete: {} seasons ({} failed), {} contestants ({} failed)",
        summary.seasons,
        summary.failed_seasons,
        summary.contestants,
        summary.failed_contestants
    );
    logf!("Output in {}", opts.data_dir().display());
    Ok(())
}

pub fn clean(args: &CleanArgs) -> Result<()> {
    let (opts, tables) = args.common.prepare()?;
    let out = reconcile::clean_files(&opts, &tables)?;
    logf!(
        "Clean complete: {} contestants, {} series in {}",
        out.contestants.len(),
        out.seasons.len(),
        opts.data_dir().display()
    );
    Ok(())
}
