// src/scrape/contestants.rs

use std::collections::{BTreeMap, HashMap};

use crate::{
    config::{consts::CHECKPOINT_EVERY, ReferenceTables, RunOptions},
    core::PageSource,
    data::{Contestant, Season},
    ledger::{Ledger, WorkItem},
    progress::Progress,
    specs::person,
    store,
};
use crate::error::Result;

/// Every non-host contestant id across the seasons, ascending, with the
/// roster name (a later season's spelling wins).
pub fn contestant_index(seasons: &[Season], tables: &ReferenceTables) -> BTreeMap<u32, String> {
    let mut index = BTreeMap::new();
    for s in seasons {
        for c in &s.contestants {
            if !tables.is_host(c.id) {
                index.insert(c.id, c.name.clone());
            }
        }
    }
    index
}

/// Series numbers of the seasons whose roster lists `id`.
pub fn series_for(seasons: &[Season], id: u32) -> Vec<u32> {
    seasons
        .iter()
        .filter(|s| s.has_contestant(id))
        .map(|s| s.series_number)
        .collect()
}

/// Previously saved profiles that do not need fetching again.
fn reusable_profiles(opts: &RunOptions, ledger: &Ledger) -> HashMap<u32, Contestant> {
    let cached: Vec<Contestant> = match store::load_json_opt(&opts.raw_contestants_path()) {
        Ok(v) => v.unwrap_or_default(),
        Err(e) => {
            logw!("Ignoring contestant checkpoint: {e}");
            Vec::new()
        }
    };

    cached
        .into_iter()
        .filter(|c| {
            let item = WorkItem::Contestant(c.id);
            c.is_complete() && (ledger.status(item).is_none() || ledger.is_done(item))
        })
        .map(|c| (c.id, c))
        .collect()
}

fn checkpoint(opts: &RunOptions, contestants: &[Contestant], ledger: &Ledger) -> Result<()> {
    store::save_json(&opts.raw_contestants_path(), contestants)?;
    ledger.save(&opts.ledger_path())
}

/// Stage 2: one profile per contestant id, reusing the checkpoint where it
/// can. Progress is saved every `CHECKPOINT_EVERY` contestants.
pub fn collect_contestants(
    source: &dyn PageSource,
    seasons: &[Season],
    tables: &ReferenceTables,
    opts: &RunOptions,
    ledger: &mut Ledger,
    progress: &mut dyn Progress,
) -> Result<Vec<Contestant>> {
    let index = contestant_index(seasons, tables);
    let total = index.len();
    logf!("Total unique contestants: {total}");

    let mut cached = reusable_profiles(opts, ledger);
    let mut contestants: Vec<Contestant> = Vec::with_capacity(total);

    progress.begin("contestants", total);
    for (i, (&cid, name)) in index.iter().enumerate() {
        let item = WorkItem::Contestant(cid);

        if let Some(c) = cached.remove(&cid) {
            logd!("[{}/{total}] {name} (cached)", i + 1);
            ledger.mark_done(item);
            progress.item_done(cid, name);
            contestants.push(c);
        } else {
            logf!("[{}/{total}] {name} (id={cid})", i + 1);
            ledger.mark_pending(item);

            match person::fetch(source, cid) {
                Ok(mut profile) => {
                    profile.name = name.clone();
                    profile.season_ids = series_for(seasons, cid);
                    ledger.mark_done(item);
                    progress.item_done(cid, name);
                    contestants.push(profile);
                }
                Err(e) => {
                    loge!("  {name}: {e}");
                    ledger.mark_errored(item, &e);
                    progress.item_failed(cid, name);
                    contestants.push(Contestant::failed(cid, name, &e));
                }
            }
        }

        if (i + 1) % CHECKPOINT_EVERY == 0 {
            checkpoint(opts, &contestants, ledger)?;
            logf!("[Progress saved: {} contestants]", contestants.len());
        }
    }
    progress.finish();

    checkpoint(opts, &contestants, ledger)?;
    Ok(contestants)
}
