//! Closer Statistics Module
//!
//! Per-cycle reports and cumulative counters for the auction closer.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cycle Report ==
/// Outcome of a single expiration cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    /// Active auctions examined
    pub checked: usize,
    /// Auctions transitioned to completed
    pub closed: usize,
    /// Expired auctions that no longer existed when updated
    pub vanished: usize,
    /// Expired auctions whose update failed and will be retried next cycle
    pub failed: usize,
}

// == Closer Stats ==
/// Cumulative counters across every cycle run by one closer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CloserStats {
    /// Cycles that ran to completion
    pub cycles_completed: u64,
    /// Cycles abandoned because the active set could not be listed
    pub cycles_skipped: u64,
    pub auctions_checked: u64,
    pub auctions_closed: u64,
    pub auctions_vanished: u64,
    pub failed_updates: u64,
    /// Reference time of the most recent cycle, completed or skipped
    pub last_cycle_at: Option<DateTime<Utc>>,
}

impl CloserStats {
    // == Constructor ==
    /// Creates a new CloserStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Cycle ==
    /// Folds a completed cycle into the totals.
    pub fn record_cycle(&mut self, report: &CycleReport, at: DateTime<Utc>) {
        self.cycles_completed += 1;
        self.auctions_checked += report.checked as u64;
        self.auctions_closed += report.closed as u64;
        self.auctions_vanished += report.vanished as u64;
        self.failed_updates += report.failed as u64;
        self.last_cycle_at = Some(at);
    }

    // == Record Skipped ==
    pub fn record_skipped(&mut self, at: DateTime<Utc>) {
        self.cycles_skipped += 1;
        self.last_cycle_at = Some(at);
    }

    // == Close Rate ==
    /// Fraction of checked auctions that were closed, or 0.0 before any check.
    pub fn close_rate(&self) -> f64 {
        if self.auctions_checked == 0 {
            0.0
        } else {
            self.auctions_closed as f64 / self.auctions_checked as f64
        }
    }
}
