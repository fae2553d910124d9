//! Request DTOs for the auction API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::auction::{Auction, ProductCondition, MAX_DESCRIPTION_LENGTH};

/// Request body for creating an auction (POST /auction)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuctionRequest {
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
}

impl CreateAuctionRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.product_name.trim().is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Some("Category cannot be empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Some("Description cannot be empty".to_string());
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Some(format!(
                "Description exceeds maximum length of {} characters",
                MAX_DESCRIPTION_LENGTH
            ));
        }
        None
    }

    /// Builds a new active auction from the request.
    pub fn into_auction(self) -> Auction {
        Auction::new(
            self.product_name,
            self.category,
            self.description,
            self.condition,
        )
    }
}
