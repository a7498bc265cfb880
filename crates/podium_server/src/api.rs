//! HTTP routes of the analytics collector.

use crate::AnalyticsStore;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use podium_error::{ServerError, ServerErrorKind};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{error, warn};

/// Shared state for the collector routes.
#[derive(Debug, Clone)]
pub struct ApiState {
    store: Arc<AnalyticsStore>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(store: Arc<AnalyticsStore>) -> Self {
        Self { store }
    }
}

/// Creates the collector router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/analytics", post(record_event))
        .route("/api/time-savings", post(record_time_savings))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn record_event(State(state): State<ApiState>, Json(body): Json<Value>) -> Response {
    store_with(state, body, |store, body| store.record_event(body)).await
}

async fn record_time_savings(State(state): State<ApiState>, Json(body): Json<Value>) -> Response {
    store_with(state, body, |store, body| store.record_time_savings(body)).await
}

async fn store_with<F>(state: ApiState, body: Value, insert: F) -> Response
where
    F: FnOnce(&AnalyticsStore, &Map<String, Value>) -> Result<i64, ServerError> + Send + 'static,
{
    let Value::Object(body) = body else {
        warn!("Rejected non-object analytics body");
        return failure(
            StatusCode::BAD_REQUEST,
            ServerError::new(ServerErrorKind::InvalidPayload(
                "body must be a JSON object".to_string(),
            )),
        );
    };

    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || insert(&*store, &body)).await;

    match result {
        Ok(Ok(id)) => (StatusCode::OK, Json(json!({"success": true, "id": id}))).into_response(),
        Ok(Err(e)) => {
            error!(error = %e, "Failed to store analytics record");
            failure(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
        Err(e) => {
            error!(error = %e, "Analytics insert task failed");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                ServerError::new(ServerErrorKind::Query(e.to_string())),
            )
        }
    }
}

fn failure(status: StatusCode, error: ServerError) -> Response {
    (
        status,
        Json(json!({"success": false, "error": error.kind.to_string()})),
    )
        .into_response()
}
