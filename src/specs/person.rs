// src/specs/person.rs

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::PERSON_PAGE;
use crate::core::html::text_of;
use crate::core::sanitize::{safe_float, safe_int};
use crate::core::{PageSource, StatSource};
use crate::data::{Category, Contestant, TaskBreakdown, TaskStats};
use crate::error::Result;

static SUB_SECTION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.statsTasksSubSection").unwrap());
static CATEGORY_HEADER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.statsTasksByCategoryHeader").unwrap());
static STATS_TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table.peopleStatsTable").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Fetch and parse one contestant page. Name and season list are filled in
/// by the caller, who knows them from the season rosters.
pub fn fetch(source: &dyn PageSource, id: u32) -> Result<Contestant> {
    let doc = source.fetch(&format!("{PERSON_PAGE}{id}"))?;
    Ok(parse(&doc, id))
}

pub fn parse(doc: &Html, id: u32) -> Contestant {
    let mut c = read_stats(doc, id);
    c.task_breakdown = parse_task_breakdown(doc);
    if c.task_breakdown.is_empty() {
        logd!("person {id}: no task breakdown on page");
    }
    c
}

/// The headline numbers, read by label.
pub fn read_stats(src: &impl StatSource, id: u32) -> Contestant {
    let int = |label: &str| safe_int(&src.stat_text(label), 0);
    let float = |label: &str| safe_float(&src.stat_text(label), 0.0);

    Contestant {
        id,
        season_wins: int("Season Wins"),
        episodes: int("Episodes"),
        episode_wins: int("Episode Wins"),
        episode_win_pct: float("Episode Win %"),
        base_points: int("Base Points"),
        bonus_points: int("Bonus Points"),
        points_deducted: int("Points Deducted"),
        total_points: int("Total Points"),
        points_per_episode: float("Points per Episode"),
        tasks_attempted: int("Tasks Attempted"),
        tasks_won: int("Tasks Won"),
        task_win_pct: float("Task Win %"),
        points_per_task: float("Points per Task"),
        dqs: int("DQs"),
        ..Contestant::default()
    }
}

/// Section header text → breakdown category.
fn section_category(header: &str) -> Option<Category> {
    match header {
        "Assignment Type" => Some(Category::Format),
        "Task Format" => Some(Category::Setting),
        "Activity Type" => Some(Category::Activity),
        "Judgment Type" => Some(Category::Judgement),
        _ => None,
    }
}

/// Lower-cased row label → canonical key.
fn row_key(label: &str) -> Option<&'static str> {
    Some(match label {
        "solo" => "solo",
        "team" => "team",
        "split" => "split",
        "tie-break" => "tiebreak",
        "prize" => "prize",
        "filmed" => "filmed",
        "homework" => "homework",
        "live" => "live",
        "creative" => "creative",
        "mental" => "mental",
        "physical" => "physical",
        "social" => "social",
        "objective" => "objective",
        "subjective" => "subjective",
        "combination" => "combo",
        _ => return None,
    })
}

/// Per-category task tables. Unknown sections and rows are skipped.
pub fn parse_task_breakdown(doc: &Html) -> TaskBreakdown {
    let mut breakdown = TaskBreakdown::default();

    for section in doc.select(&SUB_SECTION) {
        let Some(header) = section.select(&CATEGORY_HEADER).next() else { continue };
        let Some(category) = section_category(&text_of(header)) else { continue };
        let Some(table) = section.select(&STATS_TABLE).next() else {
            logd!("{} section without a stats table", category.key());
            continue;
        };

        for row in table.select(&ROW) {
            let cells: Vec<ElementRef> = row.select(&CELL).collect();
            if cells.len() < 6 { continue; }

            let label = text_of(cells[1]).to_lowercase();
            let Some(key) = row_key(&label) else { continue };

            breakdown.category_mut(category).insert(
                s!(key),
                TaskStats {
                    attempted: safe_int(&text_of(cells[2]), 0),
                    won: safe_int(&text_of(cells[3]), 0),
                    win_pct: safe_float(&text_of(cells[4]), 0.0),
                    points_per_task: safe_float(&text_of(cells[5]), 0.0),
                },
            );
        }
    }
    breakdown
}
