// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://taskmaster.info";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
pub const REFERER: &str = "https://taskmaster.info/";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Politeness
pub const REQUEST_DELAY_MS: u64 = 2_500; // after every successful fetch
pub const FETCH_RETRIES: u32 = 3;

// Pages
pub const PERSON_PAGE: &str = "person.php?id=";
pub const SEASON_PAGE: &str = "season.php?id=";

// Local data
pub const DEFAULT_DATA_DIR: &str = "data";
pub const STORE_DIR: &str = ".store";
pub const CONTESTANTS_FILE: &str = "contestants.json";
pub const SEASONS_FILE: &str = "seasons.json";
pub const ANALYSIS_FILE: &str = "analysis.json";
pub const LEDGER_FILE: &str = "ledger.json";
pub const LOG_FILE: &str = "debug.log";

// Pipeline
pub const CHECKPOINT_EVERY: usize = 10; // contestants between checkpoint writes

// Analysis
pub const MIN_EPISODES: u32 = 5;
