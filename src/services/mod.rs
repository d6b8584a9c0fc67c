//! Service layer for business logic and orchestration.
//!
//! The interval analysis sits between the HTTP handlers and the record
//! store: handlers hand it a repository reference and translate its result
//! or error into a response.

pub mod intervals;


pub use intervals::{award_intervals, AwardInterval, AwardIntervalsData, IntervalsError};
