//! Request and Response models for the auction API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies. Auctions
//! themselves serialize directly.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::CreateAuctionRequest;
pub use responses::{CloserStatsResponse, ErrorResponse, HealthResponse};
