//! Processing statistics tracking.
//!
//! This module provides thread-safe statistics tracking for page fetch
//! failures and scoring outcomes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{FetchFailureType, OutcomeType};

/// Thread-safe processing statistics tracker.
///
/// Uses atomic counters so it can be shared across request handlers through
/// `Arc`. All types are initialized to zero on creation. The pipeline only
/// writes to it; nothing it reads influences a verdict.
pub struct ProcessingStats {
    fetch_failures: HashMap<FetchFailureType, AtomicUsize>,
    outcomes: HashMap<OutcomeType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let fetch_failures = FetchFailureType::iter()
            .map(|kind| (kind, AtomicUsize::new(0)))
            .collect();
        let outcomes = OutcomeType::iter()
            .map(|outcome| (outcome, AtomicUsize::new(0)))
            .collect();

        ProcessingStats {
            fetch_failures,
            outcomes,
        }
    }

    /// Records a page fetch that fell back to the empty page.
    pub fn increment_fetch_failure(&self, kind: FetchFailureType) {
        if let Some(counter) = self.fetch_failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment fetch failure counter for {:?} which is not in the map",
                kind
            );
        }
    }

    /// Records the outcome of a scoring request.
    pub fn increment_outcome(&self, outcome: OutcomeType) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment outcome counter for {:?} which is not in the map",
                outcome
            );
        }
    }

    /// Current count for a fetch failure category.
    pub fn get_fetch_failure_count(&self, kind: FetchFailureType) -> usize {
        self.fetch_failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Current count for an outcome.
    pub fn get_outcome_count(&self, outcome: OutcomeType) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Fetch failures across all categories.
    pub fn total_fetch_failures(&self) -> usize {
        FetchFailureType::iter()
            .map(|kind| self.get_fetch_failure_count(kind))
            .sum()
    }

    /// URLs that reached any outcome.
    pub fn total_requests(&self) -> usize {
        OutcomeType::iter()
            .map(|outcome| self.get_outcome_count(outcome))
            .sum()
    }

    /// Non-zero fetch failure counts, keyed by description.
    pub fn fetch_failure_summary(&self) -> Vec<(&'static str, usize)> {
        FetchFailureType::iter()
            .map(|kind| (kind.as_str(), self.get_fetch_failure_count(kind)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Logs a summary of the statistics collected so far.
pub fn log_statistics(stats: &ProcessingStats) {
    let counts: Vec<String> = OutcomeType::iter()
        .map(|outcome| format!("{}={}", outcome.as_str(), stats.get_outcome_count(outcome)))
        .collect();
    log::info!(
        "Scored {} URL(s): {}",
        stats.total_requests(),
        counts.join(", ")
    );

    let failures = stats.fetch_failure_summary();
    if !failures.is_empty() {
        log::info!(
            "{} page fetch(es) fell back to the empty page",
            stats.total_fetch_failures()
        );
        for (description, count) in failures {
            log::info!("   {description}: {count}");
        }
    }
}
