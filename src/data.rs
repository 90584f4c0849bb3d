// src/data.rs
//
// Records as they are written to and read from the JSON files.
// Field names are camelCase to match the files' existing consumers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Performance in one task sub-category (e.g. "prize" under "setting").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub attempted: i64,
    pub won: i64,
    pub win_pct: f64,
    #[serde(rename = "ppt", alias = "pointsPerTask")]
    pub points_per_task: f64,
}

/// The four classification axes the site breaks task results down by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Format,
    Setting,
    Activity,
    Judgement,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Format, Category::Setting, Category::Activity, Category::Judgement];

    pub fn key(self) -> &'static str {
        match self {
            Category::Format => "format",
            Category::Setting => "setting",
            Category::Activity => "activity",
            Category::Judgement => "judgement",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBreakdown {
    #[serde(default)]
    pub format: BTreeMap<String, TaskStats>,
    #[serde(default)]
    pub setting: BTreeMap<String, TaskStats>,
    #[serde(default)]
    pub activity: BTreeMap<String, TaskStats>,
    #[serde(default)]
    pub judgement: BTreeMap<String, TaskStats>,
}

impl TaskBreakdown {
    pub fn category(&self, cat: Category) -> &BTreeMap<String, TaskStats> {
        match cat {
            Category::Format => &self.format,
            Category::Setting => &self.setting,
            Category::Activity => &self.activity,
            Category::Judgement => &self.judgement,
        }
    }

    pub fn category_mut(&mut self, cat: Category) -> &mut BTreeMap<String, TaskStats> {
        match cat {
            Category::Format => &mut self.format,
            Category::Setting => &mut self.setting,
            Category::Activity => &mut self.activity,
            Category::Judgement => &mut self.judgement,
        }
    }

    pub fn get(&self, cat: Category, key: &str) -> Option<&TaskStats> {
        self.category(cat).get(key)
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.category(c).is_empty())
    }
}

/// One contestant's career numbers as the site reports them.
///
/// A contestant whose page could not be fetched is kept as a placeholder
/// with `error` set and every statistic at its default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contestant {
    pub id: u32,
    pub name: String,
    pub season_wins: i64,
    pub episodes: i64,
    pub episode_wins: i64,
    pub episode_win_pct: f64,
    pub base_points: i64,
    pub bonus_points: i64,
    pub points_deducted: i64,
    pub total_points: i64,
    pub points_per_episode: f64,
    pub tasks_attempted: i64,
    pub tasks_won: i64,
    pub task_win_pct: f64,
    pub points_per_task: f64,
    pub dqs: i64,
    pub task_breakdown: TaskBreakdown,
    pub season_ids: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Contestant {
    pub fn failed(id: u32, name: &str, error: impl ToString) -> Self {
        Self {
            id,
            name: s!(name),
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// A cached profile worth reusing instead of fetching again.
    pub fn is_complete(&self) -> bool {
        !self.is_error() && self.episodes > 0
    }
}

/// A roster line on a season. Scraped entries carry only `id` and `name`;
/// reconciliation copies the headline numbers over from the profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_per_task: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_win_pct: Option<f64>,
}

impl RosterEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), ..Self::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// The site's own id for this season.
    pub id: u32,
    pub series_number: u32,
    #[serde(default)]
    pub year: i64,
    #[serde(default, alias = "episodeCount")]
    pub episodes: i64,
    #[serde(default)]
    pub contestants: Vec<RosterEntry>,
    #[serde(default)]
    pub winner: Option<Winner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Season {
    pub fn failed(site_id: u32, error: impl ToString) -> Self {
        Self {
            id: site_id,
            series_number: site_id,
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn has_contestant(&self, id: u32) -> bool {
        self.contestants.iter().any(|c| c.id == id)
    }
}
