//! Movie list CSV loading.
//!
//! Reads the semicolon-delimited movie list the service is seeded from.
//! The header must carry the five expected columns; individual rows that
//! fail to parse are skipped with a warning rather than aborting the load.

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::warn;

use crate::db::checksum::dataset_checksum;
use crate::db::models::MovieRecord;

/// Column names the movie list header must contain.
pub const EXPECTED_COLUMNS: [&str; 5] = ["year", "title", "studios", "producers", "winner"];

/// Row counts from one load, for startup logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub total_rows: usize,
    pub loaded: usize,
    pub skipped: usize,
}

/// A fully parsed movie list ready for the record store.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub movies: Vec<MovieRecord>,
    pub stats: LoadStats,
    /// SHA-256 of the raw file content, used for reload deduplication.
    pub checksum: String,
}

/// Read and parse a movie list file.
pub fn load_movies_csv(path: &Path) -> Result<LoadedDataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read movie list from {}", path.display()))?;
    let checksum = dataset_checksum(&content);
    let (movies, stats) = parse_movies_csv(&content)?;
    Ok(LoadedDataset {
        movies,
        stats,
        checksum,
    })
}

/// Parse semicolon-delimited movie list content into records.
///
/// A row is skipped (and counted) when its year is not an integer or the
/// row cannot be read at all. The winner flag is `true` only for a cell
/// that reads "yes" after trimming, ignoring case; anything else, including
/// an empty cell, marks a nominee.
pub fn parse_movies_csv(content: &str) -> Result<(Vec<MovieRecord>, LoadStats)> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .context("Failed to read movie list header")?
        .clone();
    let columns = resolve_columns(&headers)?;

    let mut movies = Vec::new();
    let mut stats = LoadStats::default();

    for row in reader.records() {
        stats.total_rows += 1;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping unreadable row {}: {}", stats.total_rows, e);
                stats.skipped += 1;
                continue;
            }
        };

        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let year = match cell(columns.year).parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                warn!(
                    "Skipping row {} with non-integer year {:?}",
                    stats.total_rows,
                    cell(columns.year)
                );
                stats.skipped += 1;
                continue;
            }
        };

        movies.push(MovieRecord {
            year,
            title: cell(columns.title).to_string(),
            studios: cell(columns.studios).to_string(),
            producers: cell(columns.producers).to_string(),
            winner: cell(columns.winner).eq_ignore_ascii_case("yes"),
        });
        stats.loaded += 1;
    }

    Ok((movies, stats))
}

struct ColumnIndices {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: usize,
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnIndices> {
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    match (
        position("year"),
        position("title"),
        position("studios"),
        position("producers"),
        position("winner"),
    ) {
        (Some(year), Some(title), Some(studios), Some(producers), Some(winner)) => {
            Ok(ColumnIndices {
                year,
                title,
                studios,
                producers,
                winner,
            })
        }
        _ => {
            let missing: Vec<&str> = EXPECTED_COLUMNS
                .iter()
                .filter(|name| position(name).is_none())
                .copied()
                .collect();
            bail!(
                "Invalid movie list header: missing columns {:?} (found {:?})",
                missing,
                headers.iter().collect::<Vec<_>>()
            );
        }
    }
}
