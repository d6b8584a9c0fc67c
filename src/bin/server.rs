//! Awards HTTP Server Binary
//!
//! Main entry point for the award-interval REST API server. It loads the
//! movie list, seeds the record store, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin awards-server
//!
//! # Against a different movie list
//! MOVIES_CSV=/path/to/movielist.csv cargo run --bin awards-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `MOVIES_CSV`: Path to the semicolon-delimited movie list (default: data/movielist.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use awards_rust::db::{services as db_services, LocalRepository, MovieRepository};
use awards_rust::http::{create_router, AppState};
use awards_rust::ingestion;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting awards HTTP server");

    // Ingest the movie list and seed an explicitly constructed record store
    let csv_path: PathBuf = env::var("MOVIES_CSV")
        .unwrap_or_else(|_| "data/movielist.csv".to_string())
        .into();
    let dataset = ingestion::load_movies_csv(&csv_path)?;
    info!(
        "Parsed {} of {} rows from {} ({} skipped)",
        dataset.stats.loaded,
        dataset.stats.total_rows,
        csv_path.display(),
        dataset.stats.skipped
    );

    let repository: Arc<dyn MovieRepository> = Arc::new(LocalRepository::new());
    db_services::load_dataset(repository.as_ref(), dataset.movies, dataset.checksum).await?;
    info!("Record store seeded");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Interval report: http://{}/awards/intervals", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
