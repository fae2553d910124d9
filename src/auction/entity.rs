//! Auction Entity Module
//!
//! Defines the auction record and its lifecycle states.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Auction Status ==
/// Lifecycle state of an auction.
///
/// The only legal transition is `Active` -> `Completed`; `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
}

impl AuctionStatus {
    /// Returns true if an auction in `self` may be set to `next`.
    ///
    /// Re-applying the current status is allowed so that status updates stay idempotent.
    pub fn can_transition_to(self, next: AuctionStatus) -> bool {
        !matches!(
            (self, next),
            (AuctionStatus::Completed, AuctionStatus::Active)
        )
    }
}

// == Product Condition ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

// == Auction ==
/// A single auction as persisted by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// Unique identifier, immutable after creation
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    /// Creation time; the expiry is derived from it
    pub created_at: DateTime<Utc>,
}

impl Auction {
    // == Constructor ==
    /// Creates a new active auction with a fresh id, stamped with the current time.
    pub fn new(
        product_name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        condition: ProductCondition,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_name: product_name.into(),
            category: category.into(),
            description: description.into(),
            condition,
            status: AuctionStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Returns a copy of this auction with a different creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    // == Expiry ==
    /// Computes `created_at + lifetime`.
    ///
    /// Returns `None` when the lifetime is too large to represent, in which case
    /// the auction never expires.
    pub fn expires_at(&self, lifetime: Duration) -> Option<DateTime<Utc>> {
        TimeDelta::from_std(lifetime)
            .ok()
            .and_then(|delta| self.created_at.checked_add_signed(delta))
    }

    /// Checks whether the auction's lifetime has elapsed at `now`.
    ///
    /// Strictly after: an auction whose expiry equals `now` is still open.
    pub fn is_expired_at(&self, lifetime: Duration, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at(lifetime), Some(expires_at) if now > expires_at)
    }

    pub fn is_active(&self) -> bool {
        self.status == AuctionStatus::Active
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Auction {
        Auction::new(
            "Vintage camera",
            "Electronics",
            "A film camera in working order",
            ProductCondition::Used,
        )
    }

    #[test]
    fn test_new_auction_is_active() {
        let auction = sample();

        assert!(auction.is_active());
        assert!(!auction.id.is_empty());
        assert_eq!(auction.condition, ProductCondition::Used);
    }

    #[test]
    fn test_new_auctions_get_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_expires_at_adds_lifetime() {
        let auction = sample();
        let expires = auction.expires_at(Duration::from_secs(300)).unwrap();

        assert_eq!(expires - auction.created_at, TimeDelta::seconds(300));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let auction = sample();
        let lifetime = Duration::from_secs(1);
        let expires = auction.expires_at(lifetime).unwrap();

        // Exactly at expiry the auction is still open
        assert!(!auction.is_expired_at(lifetime, expires));
        assert!(auction.is_expired_at(lifetime, expires + TimeDelta::milliseconds(1)));
        assert!(!auction.is_expired_at(lifetime, auction.created_at));
    }

    #[test]
    fn test_zero_lifetime_expires_after_any_elapsed_time() {
        let auction = sample();
        let later = auction.created_at + TimeDelta::nanoseconds(1);

        assert!(auction.is_expired_at(Duration::ZERO, later));
    }

    #[test]
    fn test_unrepresentable_lifetime_never_expires() {
        let auction = sample();

        assert!(auction.expires_at(Duration::MAX).is_none());
        assert!(!auction.is_expired_at(Duration::MAX, DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_status_never_reverses() {
        assert!(AuctionStatus::Active.can_transition_to(AuctionStatus::Completed));
        assert!(AuctionStatus::Completed.can_transition_to(AuctionStatus::Completed));
        assert!(AuctionStatus::Active.can_transition_to(AuctionStatus::Active));
        assert!(!AuctionStatus::Completed.can_transition_to(AuctionStatus::Active));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&AuctionStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");

        let condition: ProductCondition = serde_json::from_str("\"refurbished\"").unwrap();
        assert_eq!(condition, ProductCondition::Refurbished);
    }
}
