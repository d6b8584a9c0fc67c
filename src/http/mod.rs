//! HTTP server module.
//!
//! Axum-based REST surface over the interval analysis. The handlers reuse
//! the service layer and the repository behind [`state::AppState`]; the
//! error type translates core errors into response codes, notably mapping
//! the no-repeat-winners case to 404.

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
