//! Auction Closer Task
//!
//! Background task that periodically completes auctions whose lifetime has elapsed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

use crate::auction::{AuctionRepository, AuctionStatus};
use crate::config::CloserConfig;
use crate::error::{AuctionError, Result};
use crate::tasks::{CloserStats, CycleReport};

// == Closer State ==
/// Lifecycle of an [`AuctionCloser`]. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CloserState {
    Idle,
    Running,
    Stopping,
    Stopped,
}

// == Auction Closer ==
/// Periodically scans the active auctions and completes the expired ones.
///
/// Cycles never overlap, and a cycle that has started always runs to completion
/// before a shutdown takes effect. Closing is at-least-once: several closers may
/// share one repository, so duplicate updates must be harmless.
pub struct AuctionCloser {
    repository: Arc<dyn AuctionRepository>,
    config: CloserConfig,
    state: Mutex<CloserState>,
    stats: RwLock<CloserStats>,
    /// One-shot stop request; cancelling twice is a no-op
    stop_token: CancellationToken,
    /// Tracks the loop task so `stop` can wait for it to exit
    tracker: TaskTracker,
}

impl AuctionCloser {
    // == Constructor ==
    pub fn new(repository: Arc<dyn AuctionRepository>, config: CloserConfig) -> Self {
        Self {
            repository,
            config,
            state: Mutex::new(CloserState::Idle),
            stats: RwLock::new(CloserStats::new()),
            stop_token: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }
    }

    pub fn config(&self) -> CloserConfig {
        self.config
    }

    pub fn state(&self) -> CloserState {
        *self.lifecycle()
    }

    /// Returns a snapshot of the cumulative counters.
    pub async fn stats(&self) -> CloserStats {
        self.stats.read().await.clone()
    }

    fn lifecycle(&self) -> MutexGuard<'_, CloserState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Start ==
    /// Spawns the closer loop and returns immediately.
    ///
    /// The loop exits when `shutdown` is cancelled or [`stop`](Self::stop) is called.
    /// A closer runs at most once: starting it again fails with
    /// `CloserAlreadyStarted` while running and `CloserStopped` afterwards.
    pub fn start(self: &Arc<Self>, shutdown: CancellationToken) -> Result<()> {
        let mut state = self.lifecycle();
        match *state {
            CloserState::Idle => {}
            CloserState::Running => return Err(AuctionError::CloserAlreadyStarted),
            CloserState::Stopping | CloserState::Stopped => {
                return Err(AuctionError::CloserStopped)
            }
        }

        *state = CloserState::Running;
        self.tracker.spawn(Arc::clone(self).run(shutdown));
        Ok(())
    }

    // == Stop ==
    /// Requests shutdown and waits until the loop task has exited.
    ///
    /// Safe to call any number of times, concurrently or not; every caller returns
    /// only once no further repository access can happen.
    pub async fn stop(&self) {
        {
            let mut state = self.lifecycle();
            *state = match *state {
                CloserState::Idle | CloserState::Stopped => CloserState::Stopped,
                CloserState::Running | CloserState::Stopping => CloserState::Stopping,
            };
            self.stop_token.cancel();
            self.tracker.close();
        }

        self.tracker.wait().await;
        *self.lifecycle() = CloserState::Stopped;
    }

    // == Main Loop ==
    async fn run(self: Arc<Self>, shutdown: CancellationToken) {
        let period = self.config.check_interval;
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            check_interval = %humantime::format_duration(period),
            auction_lifetime = %humantime::format_duration(self.config.auction_lifetime),
            "Auction closer routine started"
        );

        loop {
            // Signals are only observed between cycles
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("Auction closer routine stopped due to cancellation");
                    break;
                }
                _ = self.stop_token.cancelled() => {
                    info!("Auction closer routine stopped on request");
                    break;
                }
                _ = ticker.tick() => {
                    // Failures are logged inside and retried on the next tick
                    let _ = self.check_and_close_expired_auctions().await;
                }
            }
        }

        *self.lifecycle() = CloserState::Stopped;
    }

    // == Expiration Cycle ==
    /// Runs one expiration cycle against the current time.
    pub async fn check_and_close_expired_auctions(&self) -> Result<CycleReport> {
        self.close_expired_as_of(Utc::now()).await
    }

    /// Runs one expiration cycle, judging every auction against `now`.
    ///
    /// Fails only when the active set cannot be listed, in which case nothing is
    /// updated. Per-auction update failures are logged and counted in the report.
    pub async fn close_expired_as_of(&self, now: DateTime<Utc>) -> Result<CycleReport> {
        let active = match self.repository.find_active().await {
            Ok(active) => active,
            Err(e) => {
                error!(error = %e, "Error finding active auctions to check");
                self.stats.write().await.record_skipped(now);
                return Err(e);
            }
        };

        let lifetime = self.config.auction_lifetime;
        let mut report = CycleReport {
            checked: active.len(),
            ..Default::default()
        };

        for auction in &active {
            let Some(expires_at) = auction.expires_at(lifetime).filter(|at| now > *at) else {
                continue;
            };

            match self
                .repository
                .update_status(&auction.id, AuctionStatus::Completed)
                .await
            {
                Ok(()) => {
                    info!(
                        auction_id = %auction.id,
                        product_name = %auction.product_name,
                        created_at = %auction.created_at,
                        expires_at = %expires_at,
                        closed_at = %now,
                        "Auction closed automatically"
                    );
                    report.closed += 1;
                }
                Err(e) if e.is_not_found() => {
                    // Removed or closed elsewhere since the active set was read
                    debug!(auction_id = %auction.id, "Expired auction no longer exists, skipping");
                    report.vanished += 1;
                }
                Err(e) => {
                    error!(auction_id = %auction.id, error = %e, "Error closing expired auction");
                    report.failed += 1;
                }
            }
        }

        if report.closed > 0 {
            info!(
                closed_count = report.closed,
                total_checked = report.checked,
                "Auction closer processed expired auctions"
            );
        } else {
            debug!(total_checked = report.checked, "Auction closer found no expired auctions");
        }

        self.stats.write().await.record_cycle(&report, now);
        Ok(report)
    }
}
