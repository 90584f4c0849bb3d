// src/config/reference.rs
//
// Hand-curated tables the cleaner reconciles scraped data against.
// Shipped as `assets/reference.toml`; `--reference` swaps in another file.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const BUILTIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/reference.toml"));

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    /// Contestant ids from non-UK editions; never written to clean output.
    #[serde(default)]
    pub excluded_ids: BTreeSet<u32>,

    #[serde(default)]
    pub scrape: ScrapeTargets,

    /// One entry per UK series the site carries under its own id.
    #[serde(default, rename = "season")]
    pub seasons: Vec<SeasonRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeTargets {
    #[serde(default)]
    pub season_ids: Vec<u32>,
    #[serde(default)]
    pub host_ids: BTreeSet<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonRef {
    pub site_id: u32,
    pub series: u32,
    pub year: u32,
    pub winner: String,
    pub episodes: u32,
}

impl ReferenceTables {
    /// Tables compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN, "built-in reference tables")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// `path` if given, otherwise the built-in tables.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Reference { origin: s!(origin), source })
    }

    pub fn is_excluded(&self, id: u32) -> bool {
        self.excluded_ids.contains(&id)
    }

    pub fn is_host(&self, id: u32) -> bool {
        self.scrape.host_ids.contains(&id)
    }

    /// Site season id → broadcast series number.
    pub fn site_to_series(&self) -> BTreeMap<u32, u32> {
        self.seasons.iter().map(|s| (s.site_id, s.series)).collect()
    }

    /// Configured seasons in ascending site-id order.
    pub fn seasons_by_site_id(&self) -> Vec<&SeasonRef> {
        let mut v: Vec<&SeasonRef> = self.seasons.iter().collect();
        v.sort_by_key(|s| s.site_id);
        v
    }
}
