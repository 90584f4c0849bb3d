// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use scraper::Html;
use tm_scrape::config::{ReferenceTables, RunOptions};
use tm_scrape::core::PageSource;
use tm_scrape::Error;

pub const SEASON_1: &str = include_str!("../fixtures/season_1.html");
pub const PERSON_69: &str = include_str!("../fixtures/person_69.html");

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tm_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn options(name: &str) -> RunOptions {
    RunOptions::default().with_data_dir(tmp_dir(name))
}

/// Canned site: path → HTML. Unknown paths fail like an exhausted retry budget.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn with(mut self, path: &str, html: impl Into<String>) -> Self {
        self.pages.insert(path.to_string(), html.into());
        self
    }

    pub fn remove(&mut self, path: &str) {
        self.pages.remove(path);
    }

    pub fn insert(&mut self, path: &str, html: impl Into<String>) {
        self.pages.insert(path.to_string(), html.into());
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.requests.borrow().iter().filter(|p| p.starts_with(prefix)).count()
    }

    pub fn reset_requests(&self) {
        self.requests.borrow_mut().clear();
    }
}

impl PageSource for FakeSite {
    fn fetch(&self, path: &str) -> Result<Html, Error> {
        self.requests.borrow_mut().push(path.to_string());
        match self.pages.get(path) {
            Some(html) => Ok(Html::parse_document(html)),
            None => Err(Error::Fetch {
                url: format!("https://taskmaster.info/{path}"),
                attempts: 3,
                last: "HTTP status server error (503 Service Unavailable)".to_string(),
            }),
        }
    }
}

/// Minimal season page listing `roster` as contestant cards.
pub fn season_page(year: u32, episodes: u32, roster: &[(u32, &str)], winner: Option<&str>) -> String {
    let cards: String = roster
        .iter()
        .map(|(id, name)| {
            format!(r#"<div class="contestant"><a href="person.php?id={id}"><p class="personName">{name}</p></a></div>"#)
        })
        .collect();
    let notes = winner.map(|w| format!("<p>Notes:</p><p>{w} won this series.</p>")).unwrap_or_default();
    format!(
        r#"<html><body><p>Broadcast {year}.</p>
        <div><div class="statsLabel">Episodes</div><div class="statsNumber">{episodes}</div></div>
        {cards}{notes}</body></html>"#
    )
}

/// Minimal person page with the headline numbers the analysis reads.
pub fn person_page(season_wins: u32, episodes: u32, total_points: u32, ppt: f64, prize_ppt: f64) -> String {
    format!(
        r#"<html><body>
        <div><div class="statsLabel">Season Wins</div><div class="statsNumber">{season_wins}</div></div>
        <div><div class="statsLabel">Episodes</div><div class="statsNumber">{episodes}</div></div>
        <div><div class="statsLabel">Total Points</div><div class="statsNumber">{total_points}</div></div>
        <div><div class="statsLabel">Points per Task</div><div class="statsNumber">{ppt}</div></div>
        <div class="statsTasksSubSection">
          <div class="statsTasksByCategoryHeader">Task Format</div>
          <table class="peopleStatsTable">
            <tr><td></td><td>Prize</td><td>5</td><td>1</td><td>20.0%</td><td>{prize_ppt}</td></tr>
          </table>
        </div>
        </body></html>"#
    )
}

/// Two-season tables: site 1 → series 1, site 7 → series 6.
pub fn small_tables() -> ReferenceTables {
    ReferenceTables::from_toml_str(
        r#"
        excluded_ids = [112]

        [scrape]
        season_ids = [1, 7]
        host_ids = [19, 32]

        [[season]]
        site_id = 1
        series = 1
        year = 2015
        winner = "Josh Widdicombe"
        episodes = 6

        [[season]]
        site_id = 7
        series = 6
        year = 2018
        winner = "Liza Tarbuck"
        episodes = 10
        "#,
        "test tables",
    )
    .unwrap()
}
