//! Auction Module
//!
//! The auction entity and the repository abstraction over its persisted state.

mod entity;
mod memory;
mod repository;

// Re-export public types
pub use entity::{Auction, AuctionStatus, ProductCondition};
pub use memory::InMemoryAuctionRepository;
pub use repository::{AuctionFilter, AuctionRepository};

// == Public Constants ==
/// Maximum allowed description length in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
