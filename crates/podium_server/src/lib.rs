//! Analytics collector for Podium.
//!
//! A small standalone HTTP service that appends usage events posted by the
//! `podium` CLI to SQLite tables:
//!
//! - `POST /api/analytics` → `analytics_events`
//! - `POST /api/time-savings` → `time_savings`
//! - `GET /health`
//!
//! Both POST routes take a flat JSON object, store it verbatim, and answer
//! `{"success": true, "id": n}`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod store;

pub use api::{ApiState, create_router};
pub use store::AnalyticsStore;

use podium_error::{ServerError, ServerErrorKind};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Serve the collector on `listener` until the process stops.
pub async fn serve(listener: TcpListener, store: Arc<AnalyticsStore>) -> Result<(), ServerError> {
    let address = listener
        .local_addr()
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;
    info!(%address, "Analytics collector listening");

    axum::serve(listener, create_router(ApiState::new(store)))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))
}
