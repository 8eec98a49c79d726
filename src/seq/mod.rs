//! Sequence Module
//!
//! Defines the LabSeq recurrence and the strategies that evaluate it.

mod evaluator;


// Re-export public types
pub use evaluator::{labseq_iterative, Computation, Evaluator, Strategy};

// == Public Constants ==
/// Default index cutoff above which the iterative strategy is preferred
pub const DEFAULT_ITERATIVE_THRESHOLD: u64 = 1000;
