// src/reconcile.rs
//
// Raw scrape → clean UK data, using the reference tables. Pure transform;
// `clean_files` is the only part that touches disk.

use std::collections::BTreeMap;

use crate::analysis::{self, Analysis};
use crate::config::{ReferenceTables, RunOptions, SeasonRef};
use crate::core::sanitize::contains_ci;
use crate::data::{Contestant, RosterEntry, Season, Winner};
use crate::error::Result;
use crate::store;

#[derive(Clone, Debug, PartialEq)]
pub struct Reconciled {
    pub contestants: Vec<Contestant>,
    pub seasons: Vec<Season>,
    pub analysis: Analysis,
}

pub fn reconcile(contestants: Vec<Contestant>, raw_seasons: &[Season], tables: &ReferenceTables) -> Reconciled {
    let before = contestants.len();
    let mut uk: Vec<Contestant> = contestants
        .into_iter()
        .filter(|c| !tables.is_excluded(c.id))
        .collect();
    logf!("Filtered {before} -> {} UK contestants", uk.len());

    remap_season_ids(&mut uk, &tables.site_to_series());

    let seasons: Vec<Season> = tables
        .seasons_by_site_id()
        .into_iter()
        .map(|r| build_season(r, raw_seasons.iter().find(|s| s.id == r.site_id), &uk))
        .collect();

    let analysis = analysis::build(&uk, &seasons);
    Reconciled { contestants: uk, seasons, analysis }
}

/// Site season ids → series numbers. Ids the table does not know stay as they are.
pub fn remap_season_ids(contestants: &mut [Contestant], site_to_series: &BTreeMap<u32, u32>) {
    for c in contestants {
        for sid in &mut c.season_ids {
            if let Some(series) = site_to_series.get(sid) {
                *sid = *series;
            }
        }
    }
}

fn build_season(r: &SeasonRef, raw: Option<&Season>, contestants: &[Contestant]) -> Season {
    if raw.is_none() {
        logw!("Series {} (site id {}) missing from scraped seasons", r.series, r.site_id);
    }

    let roster: Vec<RosterEntry> = raw
        .map(|s| s.contestants.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| {
            let c = contestants.iter().find(|c| c.id == entry.id)?;
            Some(RosterEntry {
                id: entry.id,
                name: entry.name.clone(),
                total_points: Some(c.total_points),
                points_per_task: Some(c.points_per_task),
                episode_win_pct: Some(c.episode_win_pct),
            })
        })
        .collect();

    let winner = resolve_winner(r.series, &r.winner, &roster);

    Season {
        id: r.site_id,
        series_number: r.series,
        year: i64::from(r.year),
        episodes: i64::from(r.episodes),
        contestants: roster,
        winner,
        error: None,
    }
}

/// The roster member whose name contains `winner_name` (any case). Failing
/// that, whoever scored the most points, with a warning.
pub fn resolve_winner(series: u32, winner_name: &str, roster: &[RosterEntry]) -> Option<Winner> {
    if let Some(hit) = roster.iter().find(|c| contains_ci(&c.name, winner_name)) {
        return Some(Winner { id: hit.id, name: hit.name.clone() });
    }

    // first of equals wins, like a stable max
    let best = roster.iter().fold(None::<&RosterEntry>, |best, c| match best {
        Some(b) if b.total_points.unwrap_or(0) >= c.total_points.unwrap_or(0) => Some(b),
        _ => Some(c),
    });

    match best {
        Some(b) => {
            logw!(
                "Series {series}: winner \"{winner_name}\" not in roster, using top scorer {} ({} pts)",
                b.name,
                b.total_points.unwrap_or(0)
            );
            Some(Winner { id: b.id, name: b.name.clone() })
        }
        None => {
            logw!("Series {series}: empty roster, no winner");
            None
        }
    }
}

/// Read the raw checkpoints, reconcile, and write the clean artifacts.
/// Reading raw input from the store keeps repeated runs idempotent.
pub fn clean_files(opts: &RunOptions, tables: &ReferenceTables) -> Result<Reconciled> {
    let contestants: Vec<Contestant> = store::load_required(&opts.raw_contestants_path())?;
    let raw_seasons: Vec<Season> = store::load_required(&opts.raw_seasons_path())?;

    let out = reconcile(contestants, &raw_seasons, tables);

    store::save_json(&opts.contestants_path(), &out.contestants)?;
    logf!("Saved {} UK contestants", out.contestants.len());
    store::save_json(&opts.seasons_path(), &out.seasons)?;
    logf!("Saved {} UK seasons", out.seasons.len());
    store::save_json(&opts.analysis_path(), &out.analysis)?;
    logf!("Saved analysis.json");

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, name: &str, pts: i64) -> RosterEntry {
        RosterEntry { total_points: Some(pts), ..RosterEntry::new(id, name) }
    }

    #[test]
    fn winner_by_name_ignores_case() {
        let roster = vec![entry(69, "Josh Widdicombe", 90), entry(8, "Rob Beckett", 100)];
        let w = resolve_winner(1, "josh widdicombe", &roster).unwrap();
        assert_eq!((w.id, w.name.as_str()), (69, "Josh Widdicombe"));
    }

    #[test]
    fn winner_falls_back_to_top_scorer() {
        let roster = vec![entry(1, "A", 50), entry(2, "B", 80), entry(3, "C", 80)];
        assert_eq!(resolve_winner(1, "Nobody", &roster).map(|w| w.id), Some(2));
        assert_eq!(resolve_winner(1, "Nobody", &[]), None);
    }

    #[test]
    fn unknown_site_ids_pass_through() {
        let mut cs = vec![Contestant { id: 1, season_ids: vec![1, 7, 6, 99], ..Contestant::default() }];
        let map = BTreeMap::from([(1, 1), (7, 6), (8, 7)]);
        remap_season_ids(&mut cs, &map);
        assert_eq!(cs[0].season_ids, vec![1, 6, 6, 99]);
    }
}
