#[cfg(test)]
mod tests {
    use crate::db::models::MovieRecord;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::MovieRepository;
    use crate::db::services;

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
    async fn test_load_dataset_stores_records() {
        let repo = LocalRepository::new();
        let count = services::load_dataset(
            &repo,
            vec![movie(1980, "A", true), movie(1981, "B", false)],
            "checksum-1".to_string(),
        )
        .await
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(services::count_movies(&repo).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_load_dataset_skips_unchanged_checksum() {
        let repo = LocalRepository::new();
        services::load_dataset(&repo, vec![movie(1980, "A", true)], "same".to_string())
            .await
            .unwrap();

        // Same checksum with different content: the store keeps what it has.
        let count = services::load_dataset(&repo, vec![], "same".to_string())
            .await
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(services::count_movies(&repo).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_load_dataset_replaces_on_new_checksum() {
        let repo = LocalRepository::new();
        services::load_dataset(&repo, vec![movie(1980, "A", true)], "v1".to_string())
            .await
            .unwrap();
        services::load_dataset(
            &repo,
            vec![movie(1990, "B", true), movie(1991, "B", true)],
            "v2".to_string(),
        )
        .await
        .unwrap();

        assert_eq!(services::count_movies(&repo).await.unwrap(), 2);
        assert_eq!(repo.dataset_checksum().await.unwrap().as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_health_check_passthrough() {
        let repo = LocalRepository::new();
        assert!(services::health_check(&repo).await.unwrap());
    }
}
