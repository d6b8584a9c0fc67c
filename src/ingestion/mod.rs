//! Startup ingestion of the movie list.
//!
//! The pipeline runs once when the server boots: read the CSV, validate the
//! header, convert rows to [`crate::db::MovieRecord`]s, and hand the result
//! to the record store. Malformed rows are skipped and counted, never fatal.

pub mod csv_loader;

#[cfg(test)]
#[path = "csv_loader_tests.rs"]
mod csv_loader_tests;

pub use csv_loader::{load_movies_csv, parse_movies_csv, LoadStats, LoadedDataset};
