// src/specs/mod.rs
//! # Page specs
//!
//! One module per page kind the site serves. Each spec knows *where the
//! numbers live in the HTML* and turns a parsed page into a record from
//! [`crate::data`].
//!
//! ## What lives here
//! - **Pure extraction** from `scraper::Html` (`parse`), testable offline
//!   against captured pages.
//! - A thin `fetch` that asks a [`crate::core::PageSource`] for the page and
//!   parses it.
//! - Label and class lookups. Stat blocks go through
//!   [`crate::core::StatSource`]; tables and rosters use CSS selectors.
//!
//! ## What does **not** live here
//! - Retry, delay and checkpointing (`core::net`, `scrape`).
//! - Reference-table corrections such as series numbering or winner names
//!   (`reconcile`).
//!
//! ## Conventions
//! - Missing markup never fails a page: absent numbers read as 0, unknown
//!   table headers and rows are skipped.
//! - Only network failures surface as errors.
//!
//! ## Current specs
//! - `person`: `person.php?id=N`, a contestant's statistics and task breakdown.
//! - `season`: `season.php?id=N`, roster, year, episode count and winner.
pub mod person;
pub mod season;
