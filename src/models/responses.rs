//! Response DTOs for the LabSeq API
//!
//! Defines the structure of outgoing HTTP response bodies. Field names
//! serialize in camelCase; term values travel as decimal strings so
//! arbitrary-precision results survive JSON unharmed.

use num_bigint::BigUint;
use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for a term request (GET /labseq/:n)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermResponse {
    /// The requested index
    pub n: u64,
    /// The term value in decimal form
    pub value: String,
    /// Number of decimal digits in the value
    pub digits: usize,
    /// Computation time in milliseconds
    pub calculation_time: u64,
    /// Whether the value was already cached when the request arrived
    pub from_cache: bool,
}

impl TermResponse {
    /// Creates a new TermResponse from a computed term.
    pub fn new(n: u64, value: &BigUint, calculation_time: u64, from_cache: bool) -> Self {
        let value = value.to_string();
        let digits = value.len();
        Self {
            n,
            value,
            digits,
            calculation_time,
            from_cache,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of computed entries in the cache
    pub entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache statistics snapshot
    pub fn new(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            entries: stats.entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (always "UP" while the process serves requests)
    pub status: String,
    /// Service name
    pub service: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            service: "LabSeq API".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
