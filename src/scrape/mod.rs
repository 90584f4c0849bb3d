// src/scrape/mod.rs
mod contestants;
mod pipeline;
mod seasons;

pub use contestants::{collect_contestants, contestant_index, series_for};
pub use pipeline::{run, RunSummary};
pub use seasons::{collect_seasons, seasons_reusable};
