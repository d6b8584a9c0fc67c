//! Shared data models for the record store.

use serde::{Deserialize, Serialize};

/// One nominated film as ingested from the movie list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Award year of the nomination.
    pub year: i32,
    pub title: String,
    pub studios: String,
    /// Raw producer credit; one or more names joined by commas and/or " and ".
    pub producers: String,
    /// Only records with `winner == true` participate in the interval analysis.
    pub winner: bool,
}
