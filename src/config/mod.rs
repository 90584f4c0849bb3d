// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod reference;

pub use options::RunOptions;
pub use reference::{ReferenceTables, SeasonRef};
