//! HTTP routes

mod api;
mod pages;

use axum::Router;

use crate::state::AppState;

/// Create main router with all routes
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        // Showcase page
        .merge(pages::routes())
        // REST API routes
        .nest("/api/v1", api::routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{sample_cards, Config};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use statcard_ui::ThemeMode;
    use tower::ServiceExt;

    fn app() -> Router {
        app_routes(AppState::new(Config {
            title: "Season".to_string(),
            theme: ThemeMode::Dark,
            cards: sample_cards(),
        }))
    }

    async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_showcase_page() {
        let (status, content_type, body) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("<h1>Season</h1>"));
        assert!(body.contains(">Games Played<"));
    }

    #[tokio::test]
    async fn test_cards_api() {
        let (status, _, body) = get("/api/v1/cards").await;
        assert_eq!(status, StatusCode::OK);

        let cards: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(cards.as_array().unwrap().len(), 2);
        assert_eq!(cards[0]["value"], 42);
        assert_eq!(cards[0]["label"], "Wins");
        assert!(cards[0].get("icon").is_none());
        assert_eq!(cards[1]["value"], "1,204");
        assert_eq!(cards[1]["class"], "border-gold");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = get("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, _) = get("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
