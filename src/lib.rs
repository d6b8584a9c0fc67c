//! # Awards Rust Backend
//!
//! Producer award-interval analysis service.
//!
//! This crate ingests a semicolon-delimited list of award-nominated films and
//! exposes a computed report over a REST API: for every producer with more
//! than one win, the interval in years between consecutive wins, plus the
//! set of intervals tied at the global minimum and maximum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`db`]: Record store, repository pattern, and dataset bookkeeping
//! - [`ingestion`]: CSV loading and row validation at startup
//! - [`services`]: Interval analysis business logic
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The record store is constructed explicitly in the server binary and passed
//! into the HTTP state; every request recomputes the report from a
//! point-in-time snapshot of the winning records, so no derived data survives
//! a request.

pub mod db;

pub mod ingestion;

pub mod services;

pub mod http;
