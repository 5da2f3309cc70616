use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tf_core::{Error, DEFAULT_CATEGORY};
use crate::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Deserialize)]
pub struct NewsRequest {
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for NewsRequest {
    fn default() -> Self {
        Self {
            category: default_category(),
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /api/news`. An empty body means the default category.
pub async fn news(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        NewsRequest::default()
    } else {
        match serde_json::from_slice::<NewsRequest>(&body) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Rejected news request body: {}", e);
                return error_response(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e));
            }
        }
    };

    match state.normalizer.articles_for(&request.category).await {
        Ok(articles) => (StatusCode::OK, Json(articles)).into_response(),
        Err(Error::UnknownCategory(category)) => {
            tracing::warn!("Unknown category requested: {}", category);
            error_response(StatusCode::BAD_REQUEST, "Invalid category")
        }
        Err(e @ Error::Feed(_)) => {
            tracing::error!("Failed to load feed for {}: {}", request.category, e);
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
        Err(e) => {
            tracing::error!("Failed to build news for {}: {}", request.category, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
