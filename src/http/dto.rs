//! Data Transfer Objects for the HTTP API.
//!
//! The interval report types already carry their wire names via serde, so
//! they are re-exported from the service layer rather than duplicated here.

use serde::{Deserialize, Serialize};

pub use crate::services::intervals::{AwardInterval, AwardIntervalsData};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Record store status
    pub database: String,
    /// Number of records currently loaded
    pub movies: usize,
}
