//! Instrumentation for how often the exact evaluation path is taken.
//!
//! The arithmetic filters are only a performance optimization - every
//! uncertified result escalates to the exact rational evaluator. This module
//! counts those escalations so that tests (and curious callers) can observe
//! how often the slow path triggers. The counter is purely diagnostic and
//! plays no role in the correctness of any predicate.

use core::sync::atomic::{AtomicUsize, Ordering};

// Relaxed ordering suffices, the value is never used for synchronization.
static EXACT_EVALUATIONS: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn record_exact_evaluation() {
    EXACT_EVALUATIONS.fetch_add(1, Ordering::Relaxed);
}

/// Returns the number of exact (generic) predicate evaluations performed by
/// this process since startup or the last call to
/// [reset_exact_evaluation_count].
pub fn exact_evaluation_count() -> usize {
    EXACT_EVALUATIONS.load(Ordering::Relaxed)
}

/// Resets the exact evaluation counter to zero.
pub fn reset_exact_evaluation_count() {
    EXACT_EVALUATIONS.store(0, Ordering::Relaxed);
}
