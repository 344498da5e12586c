// HTTP surface: /scrape, /health, /test.
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::aggregate::run_search;
use crate::fetch::Fetcher;
use crate::model::{SearchQuery, SearchRequest};

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetcher>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/scrape", post(scrape))
        .route("/health", get(health))
        .route("/test", get(test))
        // browser frontend runs on its own origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Aggregated multi-source search.
///
/// 400 on missing criteria, 200 with the ranked merge otherwise. Source
/// failures are contained inside the pipeline; only a panic in the spawned
/// pipeline task reaches the 500 arm.
async fn scrape(State(state): State<AppState>, Json(body): Json<SearchRequest>) -> Response {
    info!(
        location = body.location.as_deref().unwrap_or(""),
        description = body.description.as_deref().unwrap_or(""),
        service_type = body.service_type.as_deref().unwrap_or(""),
        "service search request"
    );

    let query = match validate(&body) {
        Ok(query) => query,
        Err(rejection) => return rejection,
    };

    let fetcher = state.fetcher.clone();
    let pipeline = tokio::spawn(async move { run_search(fetcher, &query).await });

    match pipeline.await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            error!("Scrape pipeline failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to scrape service provider data.",
                    "details": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

fn validate(body: &SearchRequest) -> Result<SearchQuery, Response> {
    let location = body.location.as_deref().map(str::trim).unwrap_or("");
    let description = body.description.as_deref().map(str::trim).unwrap_or("");

    if location.is_empty() || description.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Location and description are required.",
                "received": body,
            })),
        )
            .into_response());
    }

    Ok(SearchQuery {
        location: location.to_string(),
        description: description.to_string(),
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "message": "provider-scout API is running",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn test() -> Json<serde_json::Value> {
    Json(json!({ "message": "API is working!" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FetchError;

    struct DownFetcher;

    #[async_trait::async_trait]
    impl Fetcher for DownFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::BadStatus {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    fn request(location: Option<&str>, description: Option<&str>) -> SearchRequest {
        SearchRequest {
            location: location.map(str::to_string),
            description: description.map(str::to_string),
            service_type: None,
        }
    }

    #[test]
    fn missing_location_is_rejected() {
        let rejection = validate(&request(None, Some("electrician"))).unwrap_err();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn blank_description_is_rejected() {
        let rejection = validate(&request(Some("Mumbai"), Some("   "))).unwrap_err();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn valid_criteria_are_trimmed() {
        let query = validate(&request(Some(" Mumbai "), Some("electrician"))).unwrap();
        assert_eq!(query.location, "Mumbai");
        assert_eq!(query.description, "electrician");
    }

    #[tokio::test]
    async fn all_sources_down_is_still_http_200() {
        let state = AppState {
            fetcher: Arc::new(DownFetcher),
        };
        let response = scrape(
            State(state),
            Json(request(Some("Mumbai"), Some("electrician"))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
