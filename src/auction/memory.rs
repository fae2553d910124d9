//! In-Memory Repository Module
//!
//! HashMap-backed `AuctionRepository` used by the binary and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auction::{Auction, AuctionFilter, AuctionRepository, AuctionStatus};
use crate::error::{AuctionError, Result};

// == In-Memory Repository ==
/// Deterministic repository that keeps every auction in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAuctionRepository {
    auctions: RwLock<HashMap<String, Auction>>,
}

impl InMemoryAuctionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored auctions.
    pub async fn len(&self) -> usize {
        self.auctions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.auctions.read().await.is_empty()
    }

    /// Removes an auction outright. Used to simulate another actor deleting it.
    pub async fn remove(&self, id: &str) -> Option<Auction> {
        self.auctions.write().await.remove(id)
    }
}

/// Sorts oldest first, breaking ties by id so listings are stable.
fn sort_by_creation(auctions: &mut [Auction]) {
    auctions.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}

#[async_trait]
impl AuctionRepository for InMemoryAuctionRepository {
    async fn create(&self, auction: Auction) -> Result<()> {
        let mut auctions = self.auctions.write().await;
        if auctions.contains_key(&auction.id) {
            return Err(AuctionError::Conflict(format!(
                "Auction {} already exists",
                auction.id
            )));
        }

        auctions.insert(auction.id.clone(), auction);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Auction> {
        self.auctions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AuctionError::NotFound(id.to_string()))
    }

    async fn find_auctions(&self, filter: &AuctionFilter) -> Result<Vec<Auction>> {
        let mut result: Vec<Auction> = self
            .auctions
            .read()
            .await
            .values()
            .filter(|auction| filter.matches(auction))
            .cloned()
            .collect();

        sort_by_creation(&mut result);
        Ok(result)
    }

    async fn find_active(&self) -> Result<Vec<Auction>> {
        let mut result: Vec<Auction> = self
            .auctions
            .read()
            .await
            .values()
            .filter(|auction| auction.is_active())
            .cloned()
            .collect();

        sort_by_creation(&mut result);
        Ok(result)
    }

    async fn update_status(&self, id: &str, status: AuctionStatus) -> Result<()> {
        let mut auctions = self.auctions.write().await;
        let auction = auctions
            .get_mut(id)
            .ok_or_else(|| AuctionError::NotFound(id.to_string()))?;

        if !auction.status.can_transition_to(status) {
            return Err(AuctionError::Conflict(format!(
                "Auction {} cannot move from {:?} to {:?}",
                id, auction.status, status
            )));
        }

        auction.status = status;
        Ok(())
    }
}
