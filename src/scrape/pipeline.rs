// src/scrape/pipeline.rs

use std::path::PathBuf;

use crate::{
    analysis,
    config::{ReferenceTables, RunOptions},
    core::PageSource,
    ledger::Ledger,
    progress::Progress,
    store,
};
use crate::error::Result;

use super::{collect_contestants, collect_seasons};

/// What a scrape produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub seasons: usize,
    pub contestants: usize,
    pub failed_seasons: usize,
    pub failed_contestants: usize,
    pub files_written: Vec<PathBuf>,
}

/// Seasons → contestants → analysis, resuming from whatever checkpoints the
/// last run left behind.
pub fn run(
    source: &dyn PageSource,
    tables: &ReferenceTables,
    opts: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    store::ensure_directory(&opts.store_dir())?;
    let mut ledger = Ledger::load(&opts.ledger_path());

    progress.log("[1/3] Scraping season pages...");
    let seasons = collect_seasons(source, tables, opts, &mut ledger, progress)?;

    progress.log("[2/3] Scraping contestant profiles...");
    let contestants = collect_contestants(source, &seasons, tables, opts, &mut ledger, progress)?;

    progress.log("[3/3] Building analysis...");
    let analysis = analysis::build(&contestants, &seasons);

    let mut summary = RunSummary {
        seasons: seasons.len(),
        contestants: contestants.len(),
        failed_seasons: seasons.iter().filter(|s| s.error.is_some()).count(),
        failed_contestants: contestants.iter().filter(|c| c.is_error()).count(),
        files_written: Vec::new(),
    };

    let contestants_path = opts.contestants_path();
    store::save_json(&contestants_path, &contestants)?;
    logf!("Saved contestants.json ({} contestants)", contestants.len());
    summary.files_written.push(contestants_path);

    let seasons_path = opts.seasons_path();
    store::save_json(&seasons_path, &seasons)?;
    logf!("Saved seasons.json ({} seasons)", seasons.len());
    summary.files_written.push(seasons_path);

    let analysis_path = opts.analysis_path();
    store::save_json(&analysis_path, &analysis)?;
    logf!("Saved analysis.json");
    summary.files_written.push(analysis_path);

    let (s, c) = (ledger.tally_seasons(), ledger.tally_contestants());
    logd!("Ledger seasons: {} done, {} errored", s.done, s.errored);
    logd!("Ledger contestants: {} done, {} errored, {} pending", c.done, c.errored, c.pending);
    ledger.save(&opts.ledger_path())?;

    Ok(summary)
}
