//! Auction Closer - An auction service with automatic expiration
//!
//! Keeps auctions in a repository and runs a background task that completes
//! every auction whose lifetime has elapsed.

pub mod api;
pub mod auction;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::{CloserConfig, Config};
pub use error::AuctionError;
pub use tasks::AuctionCloser;
