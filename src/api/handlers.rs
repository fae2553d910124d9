//! API Handlers
//!
//! HTTP request handlers for each auction service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::auction::{Auction, AuctionFilter, AuctionRepository};
use crate::error::{AuctionError, Result};
use crate::models::{CloserStatsResponse, CreateAuctionRequest, HealthResponse};
use crate::tasks::AuctionCloser;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Auction persistence
    pub repository: Arc<dyn AuctionRepository>,
    /// Background closer, exposed for its stats
    pub closer: Arc<AuctionCloser>,
}

impl AppState {
    /// Creates a new AppState from a repository and the closer working on it.
    pub fn new(repository: Arc<dyn AuctionRepository>, closer: Arc<AuctionCloser>) -> Self {
        Self { repository, closer }
    }
}

/// Handler for POST /auction
///
/// Creates a new active auction.
pub async fn create_auction_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateAuctionRequest>,
) -> Result<(StatusCode, Json<Auction>)> {
    if let Some(error_msg) = req.validate() {
        return Err(AuctionError::InvalidRequest(error_msg));
    }

    let auction = req.into_auction();
    state.repository.create(auction.clone()).await?;

    Ok((StatusCode::CREATED, Json(auction)))
}

/// Handler for GET /auction
///
/// Lists auctions, optionally filtered by `status`, `category` and `product_name`.
pub async fn list_auctions_handler(
    State(state): State<AppState>,
    Query(filter): Query<AuctionFilter>,
) -> Result<Json<Vec<Auction>>> {
    let auctions = state.repository.find_auctions(&filter).await?;
    Ok(Json(auctions))
}

/// Handler for GET /auction/:id
pub async fn get_auction_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Auction>> {
    let auction = state.repository.find_by_id(&id).await?;
    Ok(Json(auction))
}

/// Handler for GET /closer/stats
///
/// Returns the closer's lifecycle state, configuration and cumulative counters.
pub async fn closer_stats_handler(State(state): State<AppState>) -> Json<CloserStatsResponse> {
    let config = state.closer.config();
    let stats = state.closer.stats().await;

    Json(CloserStatsResponse::new(
        state.closer.state(),
        config.auction_lifetime,
        config.check_interval,
        stats,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::{AuctionStatus, InMemoryAuctionRepository, ProductCondition};
    use crate::config::CloserConfig;
    use crate::tasks::CloserState;

    fn test_state() -> AppState {
        let repository: Arc<dyn AuctionRepository> = Arc::new(InMemoryAuctionRepository::new());
        let closer = Arc::new(AuctionCloser::new(
            repository.clone(),
            CloserConfig::default(),
        ));
        AppState::new(repository, closer)
    }

    fn create_request(name: &str) -> CreateAuctionRequest {
        CreateAuctionRequest {
            product_name: name.to_string(),
            category: "Electronics".to_string(),
            description: "Barely used".to_string(),
            condition: ProductCondition::Used,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = test_state();

        let (status, Json(created)) =
            create_auction_handler(State(state.clone()), Json(create_request("Phone")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.status, AuctionStatus::Active);

        let Json(found) = get_auction_handler(State(state), Path(created.id.clone()))
            .await
            .unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_get_nonexistent_auction() {
        let state = test_state();

        let result = get_auction_handler(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(AuctionError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let state = test_state();

        let result =
            create_auction_handler(State(state), Json(create_request(""))).await;
        assert!(matches!(result, Err(AuctionError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_list_auctions_handler_filters() {
        let state = test_state();
        create_auction_handler(State(state.clone()), Json(create_request("Phone")))
            .await
            .unwrap();
        create_auction_handler(State(state.clone()), Json(create_request("Tablet")))
            .await
            .unwrap();

        let filter = AuctionFilter {
            product_name: Some("tab".to_string()),
            ..Default::default()
        };
        let Json(auctions) = list_auctions_handler(State(state), Query(filter))
            .await
            .unwrap();

        assert_eq!(auctions.len(), 1);
        assert_eq!(auctions[0].product_name, "Tablet");
    }

    #[tokio::test]
    async fn test_closer_stats_handler() {
        let state = test_state();

        let response = closer_stats_handler(State(state)).await;
        assert_eq!(response.state, CloserState::Idle);
        assert_eq!(response.stats.cycles_completed, 0);
        assert_eq!(response.check_interval, "1m");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
