//! Repository trait for the movie record store.
//!
//! The trait is the data-provider contract the analysis depends on: the
//! server binary constructs an implementation explicitly and hands it to the
//! HTTP state, so nothing in the crate reaches for ambient global storage.

use async_trait::async_trait;

use super::models::MovieRecord;

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Repository trait for movie record operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Replace the stored dataset with `movies` and record its checksum.
    ///
    /// The replacement is atomic: readers observe either the previous dataset
    /// or the new one, never a mixture.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records stored
    async fn store_movies(
        &self,
        movies: Vec<MovieRecord>,
        checksum: String,
    ) -> RepositoryResult<usize>;

    /// Fetch all records with `winner == true`.
    ///
    /// Returns a stable point-in-time snapshot: the returned records are
    /// owned and unaffected by concurrent writes for the duration of one
    /// analysis invocation.
    async fn fetch_winning_movies(&self) -> RepositoryResult<Vec<MovieRecord>>;

    /// Total number of stored records, winners and nominees alike.
    async fn count_movies(&self) -> RepositoryResult<usize>;

    /// Checksum of the currently loaded dataset, if any dataset is loaded.
    async fn dataset_checksum(&self) -> RepositoryResult<Option<String>>;

    /// Check if the record store is reachable and usable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
