//! Record store module.
//!
//! This module provides the movie record store behind the Repository pattern,
//! so the analysis core depends on an abstract data provider rather than a
//! concrete storage backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                             │
//! │  - Checksum-deduplicated dataset loading                 │
//! │  - Health checks                                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no process-global repository: the server binary
//! builds a [`LocalRepository`] and passes it down through the HTTP state.

pub mod checksum;
pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;

pub use checksum::dataset_checksum;
pub use models::MovieRecord;
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, MovieRepository, RepositoryError, RepositoryResult,
};
