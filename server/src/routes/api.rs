//! REST API endpoints

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tracing::{debug, instrument};

use crate::state::AppState;

/// Create API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health and status
        .route("/health", get(health_check))
        // Cards
        .route("/cards", get(list_cards))
}

/// Health check endpoint
#[instrument]
async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");
    Json(json!({
        "status": "ok",
        "service": "statcard",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List configured cards
#[instrument(skip(state))]
async fn list_cards(State(state): State<AppState>) -> impl IntoResponse {
    debug!(count = state.config.cards.len(), "Listing cards");
    Json(state.config.cards.clone())
}
