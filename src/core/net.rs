// src/core/net.rs
//
// Blocking page fetcher with a fixed politeness delay and exponential
// backoff. One request at a time.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use scraper::Html;

use crate::config::consts::{self, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::RunOptions;
use crate::error::{Error, Result};

/// Anything that can turn a site path into a parsed page.
pub trait PageSource {
    fn fetch(&self, path: &str) -> Result<Html>;
}

pub struct Fetcher {
    client: Client,
    base_url: String,
    delay: Duration,
    retries: u32,
}

impl Fetcher {
    pub fn new(opts: &RunOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(consts::ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(consts::ACCEPT_LANGUAGE));
        headers.insert(REFERER, HeaderValue::from_static(consts::REFERER));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: s!(opts.base_url.trim_end_matches('/')),
            delay: opts.delay,
            retries: opts.retries,
        })
    }

    /// Relative paths hang off the base URL; full URLs pass through.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            s!(path)
        } else {
            join!(&self.base_url, "/", path.trim_start_matches('/'))
        }
    }

    fn get_body(&self, url: &str) -> reqwest::Result<String> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

/// Wait before retry number `attempt + 1`: `delay * 2^(attempt + 1)`.
pub fn backoff(delay: Duration, attempt: u32) -> Duration {
    delay.saturating_mul(2u32.saturating_pow(attempt + 1))
}

impl PageSource for Fetcher {
    fn fetch(&self, path: &str) -> Result<Html> {
        let url = self.resolve_url(path);
        logf!("Fetching: {url}");

        let mut last = s!("no attempts made");
        for attempt in 0..self.retries {
            match self.get_body(&url) {
                Ok(body) => {
                    thread::sleep(self.delay);
                    return Ok(Html::parse_document(&body));
                }
                Err(e) => {
                    let wait = backoff(self.delay, attempt);
                    logw!("Retry {}/{} after {:.1}s: {e}", attempt + 1, self.retries, wait.as_secs_f64());
                    last = e.to_string();
                    thread::sleep(wait);
                }
            }
        }

        Err(Error::Fetch { url, attempts: self.retries, last })
    }
}
