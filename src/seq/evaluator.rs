//! Recurrence Evaluator Module
//!
//! Evaluates the LabSeq recurrence
//!
//! ```text
//! l(0) = 0, l(1) = 1, l(2) = 0, l(3) = 1
//! l(n) = l(n-4) + l(n-3)   for n > 3
//! ```
//!
//! with one of two interchangeable strategies: recursive descent with
//! shared memoization for small indices, and a forward pass with a
//! four-term rolling window for large ones. Both produce identical
//! values for every valid index; all arithmetic is exact
//! arbitrary-precision addition.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, warn};

use crate::cache::MemoCache;
use crate::error::{LabSeqError, Result};

// == Strategy ==
/// The algorithm selected to evaluate a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Recursive descent with shared memoization
    RecursiveMemo,
    /// Forward pass with a four-term rolling window
    Iterative,
}

// == Computation ==
/// Outcome of evaluating one index.
#[derive(Debug, Clone)]
pub struct Computation {
    /// The term value l(n)
    pub value: BigUint,
    /// Whether the value was already cached when the request arrived
    pub from_cache: bool,
    /// The strategy that produced the value
    pub strategy: Strategy,
}

/// Returns the fixed value for indices below 4, None otherwise.
fn base_case(n: u64) -> Option<BigUint> {
    match n {
        0 | 2 => Some(BigUint::zero()),
        1 | 3 => Some(BigUint::one()),
        _ => None,
    }
}

// == Iterative Strategy ==
/// Computes l(n) in a single forward pass.
///
/// Retains only the four most recent terms in a rolling window
/// addressed modulo 4, so auxiliary memory stays at four terms no
/// matter how large n gets. Self-contained: never reads or populates
/// the shared cache.
pub fn labseq_iterative(n: u64) -> BigUint {
    if let Some(value) = base_case(n) {
        return value;
    }

    // Slot (i % 4) holds the oldest retained term l(i-4) and is
    // overwritten by l(i).
    let mut window = [
        BigUint::zero(), // l(0)
        BigUint::one(),  // l(1)
        BigUint::zero(), // l(2)
        BigUint::one(),  // l(3)
    ];

    for i in 4..=n {
        let current = &window[((i - 4) % 4) as usize] + &window[((i - 3) % 4) as usize];
        window[(i % 4) as usize] = current;
    }

    window[(n % 4) as usize].clone()
}

// == Recursive Strategy ==
/// Computes l(n) recursively, memoizing every intermediate index.
///
/// Every sub-index at or above 4 is routed through the cache's
/// single-flight `get_or_compute`, so across all concurrent callers a
/// distinct index is computed at most once. Base cases return their
/// constants without touching the cache.
///
/// The recursion is expressed with boxed futures. Waiting on a
/// sub-index can never deadlock: dependencies are strictly decreasing,
/// so no chain of waits leads back to n.
fn labseq_memoized(
    cache: Arc<MemoCache>,
    n: u64,
) -> Pin<Box<dyn Future<Output = Result<BigUint>> + Send>> {
    Box::pin(async move {
        if let Some(value) = base_case(n) {
            return Ok(value);
        }

        cache
            .get_or_compute(n, {
                let cache = cache.clone();
                move || async move {
                    let n_minus_4 = labseq_memoized(cache.clone(), n - 4).await?;
                    let n_minus_3 = labseq_memoized(cache, n - 3).await?;
                    Ok(n_minus_4 + n_minus_3)
                }
            })
            .await
    })
}

// == Evaluator ==
/// Evaluates LabSeq terms, selecting a strategy by index magnitude.
///
/// Owns a handle to the shared memoization cache; the evaluator itself
/// is stateless, so one instance can be shared freely across
/// concurrent callers.
pub struct Evaluator {
    /// Shared memoization cache used by the recursive strategy
    cache: Arc<MemoCache>,
    /// Index cutoff: above it the iterative strategy is selected
    threshold: u64,
}

impl Evaluator {
    // == Constructor ==
    /// Creates an Evaluator around a shared cache.
    pub fn new(cache: Arc<MemoCache>, threshold: u64) -> Self {
        Self { cache, threshold }
    }

    /// Returns the shared cache handle.
    pub fn cache(&self) -> &Arc<MemoCache> {
        &self.cache
    }

    /// Returns the configured strategy threshold.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    // == Compute ==
    /// Computes l(n).
    ///
    /// Fails with `InvalidIndex` for negative n, before any cache
    /// access. Indices above the threshold use the iterative strategy
    /// and bypass the cache entirely; the rest use recursion with
    /// memoization. `from_cache` reports an exact cache lookup taken
    /// when the request arrives, not a timing-based guess.
    pub async fn compute(&self, n: i64) -> Result<Computation> {
        if n < 0 {
            warn!(n, "rejecting negative index");
            return Err(LabSeqError::InvalidIndex(n));
        }
        let n = n as u64;

        if n > self.threshold {
            debug!(n, threshold = self.threshold, "using iterative strategy");
            Ok(Computation {
                value: labseq_iterative(n),
                from_cache: false,
                strategy: Strategy::Iterative,
            })
        } else {
            let from_cache = self.cache.contains(n).await;
            debug!(n, from_cache, "using recursive strategy with memoization");
            let value = labseq_memoized(self.cache.clone(), n).await?;
            Ok(Computation {
                value,
                from_cache,
                strategy: Strategy::RecursiveMemo,
            })
        }
    }
}
