//! Cache Module
//!
//! Provides shared, append-only memoization of computed sequence terms.

mod memo;
mod stats;

// Re-export public types
pub use memo::MemoCache;
pub use stats::CacheStats;
