//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

// == Defaults ==
/// Default time an auction stays active before it may be closed
pub const DEFAULT_AUCTION_LIFETIME: Duration = Duration::from_secs(5 * 60);
/// Default period between expiration checks
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(60);
/// Default HTTP server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// == Closer Config ==
/// Timing parameters for the auction closer, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloserConfig {
    /// How long an auction remains active after creation
    pub auction_lifetime: Duration,
    /// How often the closer scans for expired auctions
    pub check_interval: Duration,
}

impl CloserConfig {
    pub fn new(auction_lifetime: Duration, check_interval: Duration) -> Self {
        Self {
            auction_lifetime,
            check_interval,
        }
    }

    /// Resolves raw duration strings, falling back to defaults without error.
    ///
    /// A zero check interval also falls back, since it cannot drive a ticker.
    pub fn from_values(auction_lifetime: Option<&str>, check_interval: Option<&str>) -> Self {
        let check_interval = match parse_duration_or(check_interval, DEFAULT_CHECK_INTERVAL) {
            interval if interval.is_zero() => DEFAULT_CHECK_INTERVAL,
            interval => interval,
        };

        Self {
            auction_lifetime: parse_duration_or(auction_lifetime, DEFAULT_AUCTION_LIFETIME),
            check_interval,
        }
    }
}

impl Default for CloserConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AUCTION_LIFETIME, DEFAULT_CHECK_INTERVAL)
    }
}

/// Parses a duration such as `5m`, `90s`, `1h 30m` or `500ms`.
fn parse_duration_or(value: Option<&str>, default: Duration) -> Duration {
    value
        .map(str::trim)
        .and_then(|v| humantime::parse_duration(v).ok())
        .unwrap_or(default)
}

// == Service Config ==
/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Auction closer timing
    pub closer: CloserConfig,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `AUCTION_INTERVAL` - Auction lifetime as a duration string (default: 5m)
    /// - `AUCTION_CHECK_INTERVAL` - Expiration check period (default: 1m)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        let lifetime = env::var("AUCTION_INTERVAL").ok();
        let check_interval = env::var("AUCTION_CHECK_INTERVAL").ok();

        Self {
            closer: CloserConfig::from_values(lifetime.as_deref(), check_interval.as_deref()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            closer: CloserConfig::default(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}
