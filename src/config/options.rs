// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// Everything a run needs besides the reference tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    data_dir: PathBuf,
    /// Site root that relative page paths are resolved against.
    pub base_url: String,
    pub delay: Duration,
    pub retries: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            base_url: s!(BASE_URL),
            delay: Duration::from_millis(REQUEST_DELAY_MS),
            retries: FETCH_RETRIES,
        }
    }
}

impl RunOptions {
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Directory holding the clean artifacts.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding raw checkpoints, the ledger and the debug log.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join(STORE_DIR)
    }

    pub fn contestants_path(&self) -> PathBuf { self.data_dir.join(CONTESTANTS_FILE) }
    pub fn seasons_path(&self) -> PathBuf { self.data_dir.join(SEASONS_FILE) }
    pub fn analysis_path(&self) -> PathBuf { self.data_dir.join(ANALYSIS_FILE) }

    pub fn raw_contestants_path(&self) -> PathBuf { self.store_dir().join(CONTESTANTS_FILE) }
    pub fn raw_seasons_path(&self) -> PathBuf { self.store_dir().join(SEASONS_FILE) }
    pub fn ledger_path(&self) -> PathBuf { self.store_dir().join(LEDGER_FILE) }
}
