// tests/clean.rs
mod common;

use std::fs;

use common::*;
use tm_scrape::config::{ReferenceTables, RunOptions};
use tm_scrape::data::{Contestant, RosterEntry, Season, Winner};
use tm_scrape::progress::NullProgress;
use tm_scrape::reconcile::{clean_files, reconcile};
use tm_scrape::{scrape, store, Error};

fn raw_season(id: u32, roster: &[(u32, &str)]) -> Season {
    Season {
        id,
        series_number: id,
        contestants: roster.iter().map(|&(i, n)| RosterEntry::new(i, n)).collect(),
        ..Season::default()
    }
}

fn profile(id: u32, name: &str, wins: i64, points: i64, seasons: &[u32]) -> Contestant {
    Contestant {
        id,
        name: name.to_string(),
        season_wins: wins,
        episodes: 10,
        total_points: points,
        points_per_task: 2.5,
        season_ids: seasons.to_vec(),
        ..Contestant::default()
    }
}

fn write_raw(opts: &RunOptions, contestants: &[Contestant], seasons: &[Season]) {
    store::save_json(&opts.raw_contestants_path(), &contestants.to_vec()).unwrap();
    store::save_json(&opts.raw_seasons_path(), &seasons.to_vec()).unwrap();
}

#[test]
fn winner_found_by_name() {
    let tables = small_tables();
    let contestants = vec![
        profile(69, "Josh Widdicombe", 1, 1174, &[1]),
        profile(8, "Rob Beckett", 0, 900, &[1]),
    ];
    let seasons = vec![raw_season(1, &[(69, "Josh Widdicombe"), (8, "Rob Beckett")])];

    let out = reconcile(contestants, &seasons, &tables);
    let series_1 = &out.seasons[0];
    assert_eq!(series_1.series_number, 1);
    assert_eq!(series_1.year, 2015);
    assert_eq!(series_1.episodes, 6);
    assert_eq!(series_1.winner, Some(Winner { id: 69, name: "Josh Widdicombe".to_string() }));
    assert_eq!(series_1.contestants[0].total_points, Some(1174));
}

#[test]
fn excluded_ids_are_dropped_everywhere() {
    let tables = small_tables();
    let contestants = vec![
        profile(50, "Liza Tarbuck", 1, 171, &[7]),
        profile(112, "Kiwi Guest", 1, 150, &[7]),
    ];
    let seasons = vec![raw_season(7, &[(50, "Liza Tarbuck"), (112, "Kiwi Guest")])];

    let out = reconcile(contestants, &seasons, &tables);
    assert!(out.contestants.iter().all(|c| c.id != 112));
    let series_6 = out.seasons.iter().find(|s| s.series_number == 6).unwrap();
    assert!(!series_6.has_contestant(112));
    assert_eq!(out.analysis.total_contestants, 1);
}

#[test]
fn season_ids_become_series_numbers() {
    let tables = small_tables();
    let contestants = vec![profile(50, "Liza Tarbuck", 1, 171, &[7, 99])];
    let out = reconcile(contestants, &[raw_season(7, &[(50, "Liza Tarbuck")])], &tables);
    // unknown ids pass through untouched
    assert_eq!(out.contestants[0].season_ids, vec![6, 99]);
}

#[test]
fn every_table_season_is_emitted_in_order() {
    let tables = small_tables();
    let out = reconcile(Vec::new(), &[], &tables);
    let series: Vec<u32> = out.seasons.iter().map(|s| s.series_number).collect();
    assert_eq!(series, vec![1, 6]);
    assert!(out.seasons.iter().all(|s| s.winner.is_none() && s.contestants.is_empty()));
}

#[test]
fn clean_is_idempotent() {
    let opts = options("clean_twice");
    write_raw(
        &opts,
        &[
            profile(69, "Josh Widdicombe", 1, 1174, &[1]),
            profile(8, "Rob Beckett", 0, 900, &[1]),
            profile(112, "Kiwi Guest", 0, 10, &[7]),
        ],
        &[raw_season(1, &[(69, "Josh Widdicombe"), (8, "Rob Beckett")]), raw_season(7, &[(112, "Kiwi Guest")])],
    );

    let tables = small_tables();
    let first = clean_files(&opts, &tables).unwrap();
    let snapshot: Vec<Vec<u8>> = [opts.contestants_path(), opts.seasons_path(), opts.analysis_path()]
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();

    let second = clean_files(&opts, &tables).unwrap();
    assert_eq!(first, second);
    for (path, before) in [opts.contestants_path(), opts.seasons_path(), opts.analysis_path()].iter().zip(&snapshot) {
        assert_eq!(&fs::read(path).unwrap(), before, "{path:?} changed on rerun");
    }
}

#[test]
fn clean_without_raw_input_fails() {
    let opts = options("clean_missing");
    match clean_files(&opts, &small_tables()) {
        Err(Error::MissingInput { path }) => assert_eq!(path, opts.raw_contestants_path()),
        other => panic!("expected MissingInput, got {other:?}"),
    }
}

#[test]
fn scrape_then_clean() {
    let opts = options("scrape_clean");
    let site = FakeSite::default()
        .with("season.php?id=1", SEASON_1)
        .with("season.php?id=7", season_page(2018, 10, &[(50, "Liza Tarbuck"), (112, "Kiwi Guest")], None))
        .with("person.php?id=69", PERSON_69)
        .with("person.php?id=1", person_page(0, 6, 70, 1.9, 1.5))
        .with("person.php?id=44", person_page(0, 6, 64, 1.7, 2.0))
        .with("person.php?id=70", person_page(0, 6, 76, 2.1, 2.5))
        .with("person.php?id=71", person_page(0, 6, 71, 2.0, 3.0))
        .with("person.php?id=50", person_page(1, 10, 171, 3.2, 3.5))
        .with("person.php?id=112", person_page(1, 10, 150, 2.9, 2.0));
    let tables: ReferenceTables = small_tables();
    scrape::run(&site, &tables, &opts, &mut NullProgress).unwrap();

    let out = clean_files(&opts, &tables).unwrap();
    assert_eq!(out.contestants.len(), 6);
    assert_eq!(out.analysis.total_seasons, 2);
    assert_eq!(out.analysis.winners.count, 2);

    let winners: Vec<(u32, u32)> = out.analysis.season_winners.iter().map(|w| (w.season, w.id)).collect();
    assert_eq!(winners, vec![(1, 69), (6, 50)]);

    let written: Vec<Season> = store::load_json(&opts.seasons_path()).unwrap();
    assert_eq!(written, out.seasons);
}
