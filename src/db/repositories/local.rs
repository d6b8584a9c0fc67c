//! In-memory movie repository.
//!
//! All data lives in process memory behind an `RwLock`, matching the single
//! process lifetime the service promises: the dataset is loaded once at
//! startup and discarded on exit.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::db::models::MovieRecord;
use crate::db::repository::{ErrorContext, MovieRepository, RepositoryError, RepositoryResult};

/// In-memory movie record store.
///
/// Cloning is cheap; clones share the same underlying data.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    movies: Vec<MovieRecord>,
    checksum: Option<String>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: &str) -> RepositoryResult<RwLockReadGuard<'_, LocalData>> {
        self.data.read().map_err(|_| {
            RepositoryError::internal("record store lock poisoned")
                .with_context(ErrorContext::new(operation).with_entity("movie"))
        })
    }

    fn write(&self, operation: &str) -> RepositoryResult<RwLockWriteGuard<'_, LocalData>> {
        self.data.write().map_err(|_| {
            RepositoryError::internal("record store lock poisoned")
                .with_context(ErrorContext::new(operation).with_entity("movie"))
        })
    }
}

#[async_trait]
impl MovieRepository for LocalRepository {
    async fn store_movies(
        &self,
        movies: Vec<MovieRecord>,
        checksum: String,
    ) -> RepositoryResult<usize> {
        let mut data = self.write("store_movies")?;
        let stored = movies.len();
        data.movies = movies;
        data.checksum = Some(checksum);
        Ok(stored)
    }

    async fn fetch_winning_movies(&self) -> RepositoryResult<Vec<MovieRecord>> {
        // Snapshot under one read-lock acquisition: callers get owned records
        // that later writes cannot tear.
        let data = self.read("fetch_winning_movies")?;
        Ok(data
            .movies
            .iter()
            .filter(|movie| movie.winner)
            .cloned()
            .collect())
    }

    async fn count_movies(&self) -> RepositoryResult<usize> {
        let data = self.read("count_movies")?;
        Ok(data.movies.len())
    }

    async fn dataset_checksum(&self) -> RepositoryResult<Option<String>> {
        let data = self.read("dataset_checksum")?;
        Ok(data.checksum.clone())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(year: i32, producers: &str, winner: bool) -> MovieRecord {
        MovieRecord {
            year,
            title: format!("Movie {}", year),
            studios: "Test Studios".to_string(),
            producers: producers.to_string(),
            winner,
        }
    }

    #[tokio::test]
    async fn test_store_and_count() {
        let repo = LocalRepository::new();
        let stored = repo
            .store_movies(
                vec![movie(1980, "A", true), movie(1981, "B", false)],
                "abc".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(stored, 2);
        assert_eq!(repo.count_movies().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_fetch_winning_movies_filters_nominees() {
        let repo = LocalRepository::new();
        repo.store_movies(
            vec![
                movie(1980, "A", true),
                movie(1981, "B", false),
                movie(1982, "C", true),
            ],
            "abc".to_string(),
        )
        .await
        .unwrap();

        let winners = repo.fetch_winning_movies().await.unwrap();
        assert_eq!(winners.len(), 2);
        assert!(winners.iter().all(|m| m.winner));
    }

    #[tokio::test]
    async fn test_store_replaces_previous_dataset() {
        let repo = LocalRepository::new();
        repo.store_movies(vec![movie(1980, "A", true)], "v1".to_string())
            .await
            .unwrap();
        repo.store_movies(vec![movie(1990, "B", true), movie(1991, "B", true)], "v2".to_string())
            .await
            .unwrap();

        assert_eq!(repo.count_movies().await.unwrap(), 2);
        assert_eq!(repo.dataset_checksum().await.unwrap().as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_snapshot_is_stable_across_writes() {
        let repo = LocalRepository::new();
        repo.store_movies(vec![movie(1980, "A", true)], "v1".to_string())
            .await
            .unwrap();

        let snapshot = repo.fetch_winning_movies().await.unwrap();
        repo.store_movies(vec![], "v2".to_string()).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.count_movies().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = LocalRepository::new();
        assert_eq!(repo.count_movies().await.unwrap(), 0);
        assert!(repo.fetch_winning_movies().await.unwrap().is_empty());
        assert_eq!(repo.dataset_checksum().await.unwrap(), None);
        assert!(repo.health_check().await.unwrap());
    }
}
