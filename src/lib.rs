//! LabSeq - HTTP microservice for the LabSeq recurrence
//!
//! Computes terms of l(n) = l(n-4) + l(n-3) over arbitrary-precision
//! integers and serves them on demand, memoizing results across
//! concurrent callers.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod seq;

pub use api::AppState;
pub use config::Config;
