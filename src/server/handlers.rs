// Request handlers and router assembly

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::errors::ReviewError;
use crate::providers::ReviewModel;
use crate::review::{self, prompt, ReviewRequest};

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ReviewModel>,
    pub default_language: String,
}

/// Build the application router.
///
/// Split out from `serve()` so integration tests can drive it with
/// `tower::ServiceExt::oneshot` without binding a socket. Registering
/// only `post` on the review route makes axum answer other methods
/// with 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/get-review", post(handle_review))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/get-review — one review round trip.
///
/// Validation happens before the model is invoked so a bad request
/// never costs an API call. The success body is markdown as plain
/// text, not JSON.
async fn handle_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Response {
    if request.code.trim().is_empty() {
        return error_response(&ReviewError::Validation(
            "code is required".to_string(),
        ));
    }

    let language = review::resolve_language(
        request.language.as_deref(),
        &request.code,
        &state.default_language,
    )
    .to_string();

    let review_prompt = match prompt::build(&request.code, &language) {
        Ok(p) => p,
        Err(e) => return error_response(&e),
    };

    tracing::debug!(language = %language, code_bytes = request.code.len(), "Handling review request");

    match state.model.generate(&review_prompt).await {
        Ok(raw) => {
            let cleaned = review::sanitize(&raw);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                cleaned,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Review generation failed");
            error_response(&e)
        }
    }
}

/// Map an error kind to its HTTP response.
///
/// Upstream and configuration detail stays in the log; the client sees
/// a generic message.
fn error_response(error: &ReviewError) -> Response {
    let (status, message) = match error {
        ReviewError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
        ReviewError::Upstream(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to generate code review",
        ),
        ReviewError::Configuration(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server misconfigured"),
    };
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
