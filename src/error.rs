//! Error types for the auction service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Auction Error Enum ==
/// Unified error type for the auction service.
#[derive(Error, Debug)]
pub enum AuctionError {
    /// No auction exists with the given id
    #[error("Auction not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Write rejected by the current state of the store
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backing store failed; the operation may succeed if retried
    #[error("Storage error: {0}")]
    Storage(String),

    /// `start` called on a closer that is already running
    #[error("Auction closer already started")]
    CloserAlreadyStarted,

    /// `start` called on a closer that has been stopped
    #[error("Auction closer is stopped and cannot be restarted")]
    CloserStopped,
}

impl AuctionError {
    /// True when the error means the target auction does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AuctionError::NotFound(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AuctionError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuctionError::NotFound(_) => StatusCode::NOT_FOUND,
            AuctionError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AuctionError::Conflict(_) => StatusCode::CONFLICT,
            AuctionError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuctionError::CloserAlreadyStarted | AuctionError::CloserStopped => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the auction service.
pub type Result<T> = std::result::Result<T, AuctionError>;
