// src/ledger.rs
//
// Per-item work status, persisted next to the checkpoints. Lets a resumed run
// tell "fetched fine" from "failed last time" without guessing from the
// cached record alone.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Status {
    Pending,
    Done,
    Errored { error: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkItem {
    Season(u32),
    Contestant(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    seasons: BTreeMap<u32, Status>,
    #[serde(default)]
    contestants: BTreeMap<u32, Status>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub pending: usize,
    pub done: usize,
    pub errored: usize,
}

impl Ledger {
    /// Missing or unreadable ledgers start empty; the checkpoints themselves
    /// still drive the resume in that case.
    pub fn load(path: &Path) -> Self {
        match store::load_json_opt(path) {
            Ok(Some(ledger)) => ledger,
            Ok(None) => Self::default(),
            Err(e) => {
                logw!("Ignoring unreadable ledger: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save_json(path, self)
    }

    fn entries(&self, item: WorkItem) -> (&BTreeMap<u32, Status>, u32) {
        match item {
            WorkItem::Season(id) => (&self.seasons, id),
            WorkItem::Contestant(id) => (&self.contestants, id),
        }
    }

    fn set(&mut self, item: WorkItem, status: Status) {
        let (map, id) = match item {
            WorkItem::Season(id) => (&mut self.seasons, id),
            WorkItem::Contestant(id) => (&mut self.contestants, id),
        };
        map.insert(id, status);
    }

    pub fn status(&self, item: WorkItem) -> Option<&Status> {
        let (map, id) = self.entries(item);
        map.get(&id)
    }

    pub fn mark_pending(&mut self, item: WorkItem) {
        self.set(item, Status::Pending);
    }

    pub fn mark_done(&mut self, item: WorkItem) {
        self.set(item, Status::Done);
    }

    pub fn mark_errored(&mut self, item: WorkItem, error: impl ToString) {
        self.set(item, Status::Errored { error: error.to_string() });
    }

    pub fn is_done(&self, item: WorkItem) -> bool {
        matches!(self.status(item), Some(Status::Done))
    }

    pub fn is_errored(&self, item: WorkItem) -> bool {
        matches!(self.status(item), Some(Status::Errored { .. }))
    }

    pub fn tally_contestants(&self) -> Tally {
        tally(&self.contestants)
    }

    pub fn tally_seasons(&self) -> Tally {
        tally(&self.seasons)
    }
}

fn tally(map: &BTreeMap<u32, Status>) -> Tally {
    map.values().fold(Tally::default(), |mut t, s| {
        match s {
            Status::Pending => t.pending += 1,
            Status::Done => t.done += 1,
            Status::Errored { .. } => t.errored += 1,
        }
        t
    })
}
