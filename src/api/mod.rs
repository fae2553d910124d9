//! API Module
//!
//! HTTP handlers and routing for the auction service REST API.
//!
//! # Endpoints
//! - `POST /auction` - Create an auction
//! - `GET /auction` - List auctions by status, category or product name
//! - `GET /auction/:id` - Retrieve one auction
//! - `GET /closer/stats` - Auction closer state and counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
