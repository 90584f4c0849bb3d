// src/analysis.rs
//
// Winners vs. everyone else. Rebuilt from scratch on every run; nothing here
// depends on previous output.

use serde::{Deserialize, Serialize};

use crate::config::consts::MIN_EPISODES;
use crate::data::{Category, Contestant, Season};

const KEY_INSIGHTS: [&str; 3] = [
    "Comparing season winners vs non-winners across all task categories",
    "Task type performance correlations with series victory",
    "Episode win percentage patterns for champions",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub total_contestants: usize,
    pub total_seasons: usize,
    pub winners: GroupStats,
    pub non_winners: GroupStats,
    pub season_winners: Vec<SeasonWinner>,
    pub key_insights: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub count: usize,
    pub avg_points_per_task: f64,
    pub avg_points_per_episode: f64,
    pub avg_episode_win_pct: f64,
    pub avg_task_win_pct: f64,
    pub by_task_type: TaskTypeAverages,
    pub by_activity: ActivityAverages,
    pub by_judgement: JudgementAverages,
    pub by_format: FormatAverages,
}

/// Points per task by where the task happens ("setting" in the breakdown).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskTypeAverages {
    pub prize: f64,
    pub filmed: f64,
    pub live: f64,
    pub homework: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityAverages {
    pub creative: f64,
    pub mental: f64,
    pub physical: f64,
    pub social: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JudgementAverages {
    pub objective: f64,
    pub subjective: f64,
    pub combo: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatAverages {
    pub solo: f64,
    pub team: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonWinner {
    pub season: u32,
    pub name: String,
    pub id: u32,
    pub total_points: i64,
    pub points_per_task: f64,
    pub episode_win_pct: f64,
}

/// Mean of the non-zero values, rounded to 2 places. No values → 0.
pub fn avg<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, n) = values
        .into_iter()
        .filter(|v| *v != 0.0)
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        return 0.0;
    }
    round2(sum / n as f64)
}

/// Two decimal places, exact halves to even (2.125 → 2.12).
fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Average points-per-task in one breakdown cell across a group.
fn avg_breakdown(group: &[&Contestant], cat: Category, key: &str) -> f64 {
    avg(group
        .iter()
        .filter_map(|c| c.task_breakdown.get(cat, key))
        .map(|t| t.points_per_task))
}

fn avg_field(group: &[&Contestant], field: impl Fn(&Contestant) -> f64) -> f64 {
    avg(group.iter().map(|c| field(c)))
}

pub fn group_stats(group: &[&Contestant]) -> GroupStats {
    let bd = |cat, key| avg_breakdown(group, cat, key);
    GroupStats {
        count: group.len(),
        avg_points_per_task: avg_field(group, |c| c.points_per_task),
        avg_points_per_episode: avg_field(group, |c| c.points_per_episode),
        avg_episode_win_pct: avg_field(group, |c| c.episode_win_pct),
        avg_task_win_pct: avg_field(group, |c| c.task_win_pct),
        by_task_type: TaskTypeAverages {
            prize: bd(Category::Setting, "prize"),
            filmed: bd(Category::Setting, "filmed"),
            live: bd(Category::Setting, "live"),
            homework: bd(Category::Setting, "homework"),
        },
        by_activity: ActivityAverages {
            creative: bd(Category::Activity, "creative"),
            mental: bd(Category::Activity, "mental"),
            physical: bd(Category::Activity, "physical"),
            social: bd(Category::Activity, "social"),
        },
        by_judgement: JudgementAverages {
            objective: bd(Category::Judgement, "objective"),
            subjective: bd(Category::Judgement, "subjective"),
            combo: bd(Category::Judgement, "combo"),
        },
        by_format: FormatAverages {
            solo: bd(Category::Format, "solo"),
            team: bd(Category::Format, "team"),
        },
    }
}

/// Contestants with enough episodes and no fetch error.
pub fn is_valid(c: &Contestant) -> bool {
    !c.is_error() && c.episodes >= i64::from(MIN_EPISODES)
}

pub fn build(contestants: &[Contestant], seasons: &[Season]) -> Analysis {
    let valid: Vec<&Contestant> = contestants.iter().filter(|c| is_valid(c)).collect();
    let (winners, non_winners): (Vec<&Contestant>, Vec<&Contestant>) =
        valid.iter().copied().partition(|c| c.season_wins > 0);

    let season_winners = seasons
        .iter()
        .filter_map(|s| {
            let w = s.winner.as_ref()?;
            let c = contestants.iter().find(|c| c.id == w.id && !c.is_error())?;
            Some(SeasonWinner {
                season: s.series_number,
                name: w.name.clone(),
                id: w.id,
                total_points: c.total_points,
                points_per_task: c.points_per_task,
                episode_win_pct: c.episode_win_pct,
            })
        })
        .collect();

    Analysis {
        total_contestants: valid.len(),
        total_seasons: seasons.len(),
        winners: group_stats(&winners),
        non_winners: group_stats(&non_winners),
        season_winners,
        key_insights: KEY_INSIGHTS.iter().map(|s| s!(*s)).collect(),
    }
}
