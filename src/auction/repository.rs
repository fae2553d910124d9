//! Auction Repository Module
//!
//! The persistence capability set the rest of the service depends on.

use async_trait::async_trait;
use serde::Deserialize;

use crate::auction::{Auction, AuctionStatus};
use crate::error::Result;

// == Auction Filter ==
/// Optional criteria for listing auctions. Unset fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuctionFilter {
    #[serde(default)]
    pub status: Option<AuctionStatus>,
    /// Exact category match
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name
    #[serde(default)]
    pub product_name: Option<String>,
}

impl AuctionFilter {
    /// Returns true if `auction` satisfies every set criterion.
    pub fn matches(&self, auction: &Auction) -> bool {
        if let Some(status) = self.status {
            if auction.status != status {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if auction.category != category {
                return false;
            }
        }

        if let Some(name) = self.product_name.as_deref().filter(|n| !n.is_empty()) {
            if !auction
                .product_name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

// == Auction Repository ==
/// Storage operations over persisted auctions.
///
/// Implementations must keep `NotFound` distinct from `Storage` failures. Every
/// method is cancelled by dropping its future.
#[async_trait]
pub trait AuctionRepository: Send + Sync {
    /// Persists a new auction. Fails with `Conflict` if the id is taken.
    async fn create(&self, auction: Auction) -> Result<()>;

    /// Looks up one auction. Fails with `NotFound` if absent.
    async fn find_by_id(&self, id: &str) -> Result<Auction>;

    /// Lists auctions matching `filter`, oldest first.
    async fn find_auctions(&self, filter: &AuctionFilter) -> Result<Vec<Auction>>;

    /// Lists every auction currently `Active`. Empty when nothing is active.
    async fn find_active(&self) -> Result<Vec<Auction>>;

    /// Sets the status of an auction.
    ///
    /// Fails with `NotFound` if the id no longer exists. Re-applying the current
    /// status succeeds.
    async fn update_status(&self, id: &str, status: AuctionStatus) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::ProductCondition;

    fn auction(name: &str, category: &str) -> Auction {
        Auction::new(name, category, "Test description", ProductCondition::New)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = AuctionFilter::default();
        assert!(filter.matches(&auction("Laptop", "Electronics")));
    }

    #[test]
    fn test_filter_by_status() {
        let mut completed = auction("Laptop", "Electronics");
        completed.status = AuctionStatus::Completed;

        let filter = AuctionFilter {
            status: Some(AuctionStatus::Active),
            ..Default::default()
        };

        assert!(filter.matches(&auction("Laptop", "Electronics")));
        assert!(!filter.matches(&completed));
    }

    #[test]
    fn test_filter_by_category_is_exact() {
        let filter = AuctionFilter {
            category: Some("Books".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&auction("Novel", "Books")));
        assert!(!filter.matches(&auction("Novel", "Bookshelves")));
    }

    #[test]
    fn test_filter_by_product_name_is_case_insensitive_substring() {
        let filter = AuctionFilter {
            product_name: Some("CAMERA".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&auction("Vintage camera body", "Photo")));
        assert!(!filter.matches(&auction("Tripod", "Photo")));
    }

    #[test]
    fn test_blank_criteria_are_ignored() {
        let filter = AuctionFilter {
            status: None,
            category: Some(String::new()),
            product_name: Some(String::new()),
        };

        assert!(filter.matches(&auction("Anything", "Any")));
    }
}
