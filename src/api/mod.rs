//! API Module
//!
//! HTTP handlers and routing for the LabSeq REST API.
//!
//! # Endpoints
//! - `GET /labseq/:n` - Compute the sequence term at index n
//! - `GET /stats` - Get memoization cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
