//! Response DTOs for the auction API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::tasks::{CloserState, CloserStats};

/// Response body for the closer stats endpoint (GET /closer/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CloserStatsResponse {
    /// Lifecycle state of the closer
    pub state: CloserState,
    /// Configured auction lifetime, human readable (e.g. "5m")
    pub auction_lifetime: String,
    /// Configured check interval, human readable (e.g. "1m")
    pub check_interval: String,
    #[serde(flatten)]
    pub stats: CloserStats,
    /// Closed / checked across all cycles
    pub close_rate: f64,
}

impl CloserStatsResponse {
    pub fn new(
        state: CloserState,
        auction_lifetime: std::time::Duration,
        check_interval: std::time::Duration,
        stats: CloserStats,
    ) -> Self {
        Self {
            state,
            auction_lifetime: humantime::format_duration(auction_lifetime).to_string(),
            check_interval: humantime::format_duration(check_interval).to_string(),
            close_rate: stats.close_rate(),
            stats,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
