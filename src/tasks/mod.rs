//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Auction Closer: completes auctions whose lifetime has elapsed

mod closer;
mod stats;


pub use closer::{AuctionCloser, CloserState};
pub use stats::{CloserStats, CycleReport};
