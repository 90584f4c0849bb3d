// src/error.rs
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Retry budget exhausted for one page.
    #[error("failed to fetch {url} after {attempts} attempts: {last}")]
    Fetch {
        url: String,
        attempts: u32,
        last: String,
    },

    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid reference tables in {origin}: {source}")]
    Reference {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing input {}: run the scraper first", path.display())]
    MissingInput { path: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
