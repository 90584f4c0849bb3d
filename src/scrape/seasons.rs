// src/scrape/seasons.rs

use crate::{
    config::{ReferenceTables, RunOptions},
    core::PageSource,
    data::Season,
    ledger::{Ledger, WorkItem},
    progress::Progress,
    specs::season,
    store,
};
use crate::error::Result;

/// Cached seasons are good enough when every required id is there with a
/// roster and the ledger has not recorded a failure for it.
pub fn seasons_reusable(cached: &[Season], required: &[u32], ledger: &Ledger) -> bool {
    required.iter().all(|&id| {
        !ledger.is_errored(WorkItem::Season(id))
            && cached.iter().any(|s| s.id == id && !s.contestants.is_empty())
    })
}

/// Stage 1: every configured season page, or the cached pass if complete.
/// A season that fails to fetch is kept as an error placeholder.
pub fn collect_seasons(
    source: &dyn PageSource,
    tables: &ReferenceTables,
    opts: &RunOptions,
    ledger: &mut Ledger,
    progress: &mut dyn Progress,
) -> Result<Vec<Season>> {
    let required = &tables.scrape.season_ids;
    let cache_path = opts.raw_seasons_path();

    match store::load_json_opt::<Vec<Season>>(&cache_path) {
        Ok(Some(cached)) if seasons_reusable(&cached, required, ledger) => {
            logf!("Loaded {} seasons from cache", cached.len());
            for &id in required {
                ledger.mark_done(WorkItem::Season(id));
            }
            return Ok(cached);
        }
        Ok(_) => {}
        Err(e) => logw!("Ignoring season cache: {e}"),
    }

    progress.begin("seasons", required.len());
    let mut seasons = Vec::with_capacity(required.len());

    for &sid in required {
        logf!("Season (site id={sid}):");
        ledger.mark_pending(WorkItem::Season(sid));

        match season::fetch(source, sid, &tables.scrape.host_ids) {
            Ok(s) => {
                let names: Vec<&str> = s.contestants.iter().map(|c| c.name.as_str()).collect();
                logf!("  Contestants: {names:?}");
                if let Some(w) = &s.winner {
                    logf!("  Winner: {}", w.name);
                }
                ledger.mark_done(WorkItem::Season(sid));
                progress.item_done(sid, &format!("season {sid}"));
                seasons.push(s);
            }
            Err(e) => {
                loge!("  Season {sid}: {e}");
                ledger.mark_errored(WorkItem::Season(sid), &e);
                progress.item_failed(sid, &format!("season {sid}"));
                seasons.push(Season::failed(sid, &e));
            }
        }
    }
    progress.finish();

    store::save_json(&cache_path, &seasons)?;
    ledger.save(&opts.ledger_path())?;
    Ok(seasons)
}
