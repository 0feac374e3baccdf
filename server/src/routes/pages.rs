//! Showcase page routes

use axum::{extract::State, response::Html, routing::get, Router};
use tracing::instrument;

use crate::{state::AppState, ui::render_document};

/// Create page router
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(showcase_page))
}

/// Showcase page handler
#[instrument(skip(state))]
async fn showcase_page(State(state): State<AppState>) -> Html<String> {
    Html(render_document(&state.config))
}
