//! High-level record store service layer.
//!
//! Repository-agnostic operations that work with any implementation of
//! [`MovieRepository`]. Business logic that must behave the same regardless
//! of the storage backend lives here, notably the checksum-based reload
//! short-circuit.

use log::info;

use super::repository::{MovieRepository, RepositoryResult};
use crate::db::models::MovieRecord;

/// Check if the record store is healthy.
///
/// Simple pass-through to the repository's health check.
pub async fn health_check<R>(repo: &R) -> RepositoryResult<bool>
where
    R: MovieRepository + ?Sized,
{
    repo.health_check().await
}

/// Load a dataset into the record store.
///
/// If the store already holds a dataset with the same checksum the load is
/// skipped and the existing record count is returned, so restarting the
/// server against an unchanged movie list does not rewrite the store.
///
/// # Returns
/// * `Ok(usize)` - Number of records in the store after the call
pub async fn load_dataset<R>(
    repo: &R,
    movies: Vec<MovieRecord>,
    checksum: String,
) -> RepositoryResult<usize>
where
    R: MovieRepository + ?Sized,
{
    if repo.dataset_checksum().await?.as_deref() == Some(checksum.as_str()) {
        let count = repo.count_movies().await?;
        info!(
            "Dataset checksum unchanged ({}), keeping {} stored records",
            checksum, count
        );
        return Ok(count);
    }

    let stored = repo.store_movies(movies, checksum).await?;
    info!("Stored {} movie records", stored);
    Ok(stored)
}

/// Total number of stored records.
pub async fn count_movies<R>(repo: &R) -> RepositoryResult<usize>
where
    R: MovieRepository + ?Sized,
{
    repo.count_movies().await
}
