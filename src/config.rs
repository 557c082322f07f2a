//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema (stations, polling, scraping,
//! enrichment, preview, relay server, logging) and helpers to load it from disk
//! and the environment.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;
