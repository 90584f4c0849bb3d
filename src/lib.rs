// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod ledger;
pub mod progress;
pub mod reconcile;
pub mod scrape;
pub mod specs;
pub mod store;

pub use error::{Error, Result};
