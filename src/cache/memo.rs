//! Memoization Cache Module
//!
//! Process-wide, append-only store of computed sequence terms with
//! single-flight coordination per index.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use num_bigint::BigUint;
use tokio::sync::{Mutex, OnceCell};

use crate::cache::CacheStats;
use crate::error::Result;

// == Memo Cache ==
/// Index-keyed store of computed terms.
///
/// Entries are write-once: the recurrence is pure, so a stored value is
/// never updated or evicted for the lifetime of the process. Each index
/// gets its own `OnceCell`; callers racing on an uncomputed index park
/// on the cell while a single winner runs the computation. The map lock
/// is only held long enough to hand out a cell, never across a
/// computation, so computations for distinct indices proceed in
/// parallel.
#[derive(Debug, Default)]
pub struct MemoCache {
    /// Per-index computation cells
    cells: Mutex<HashMap<u64, Arc<OnceCell<BigUint>>>>,
    /// Hit/miss counters
    stats: Mutex<CacheStats>,
}

impl MemoCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get Or Compute ==
    /// Returns the cached value for `key`, computing it on first access.
    ///
    /// Under N-way concurrent first access to the same key, `compute`
    /// runs exactly once and every caller receives the same value;
    /// waiters park on the cell rather than spinning. If `compute`
    /// fails, the error surfaces to the caller and the cell stays
    /// empty, so the key remains retryable instead of being wedged in a
    /// failed state.
    pub async fn get_or_compute<F, Fut>(&self, key: u64, compute: F) -> Result<BigUint>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<BigUint>>,
    {
        let cell = {
            let mut cells = self.cells.lock().await;
            cells
                .entry(key)
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        if let Some(value) = cell.get() {
            self.stats.lock().await.record_hit();
            return Ok(value.clone());
        }
        self.stats.lock().await.record_miss();

        let value = cell.get_or_try_init(compute).await?;
        Ok(value.clone())
    }

    // == Contains ==
    /// Reports whether `key` already holds a computed value.
    ///
    /// A peek only: does not wait on in-flight computations and does
    /// not touch the hit/miss counters.
    pub async fn contains(&self, key: u64) -> bool {
        let cells = self.cells.lock().await;
        cells.get(&key).is_some_and(|cell| cell.get().is_some())
    }

    // == Length ==
    /// Returns the number of fully computed entries.
    pub async fn len(&self) -> usize {
        let cells = self.cells.lock().await;
        cells.values().filter(|cell| cell.get().is_some()).count()
    }

    // == Is Empty ==
    /// Returns true if no entry has been computed yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let mut stats = self.stats.lock().await.clone();
        stats.set_entries(self.len().await);
        stats
    }
}
