//! Tests for the best-effort analytics client.

mod test_utils;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use podium_gateway::{AnalyticsClient, TimeSavings};
use serde_json::{Value, json};
use std::time::Duration;
use test_utils::{Recorder, serve};

async fn collector(recorder: Recorder) -> anyhow::Result<String> {
    let handler = |State(recorder): State<Recorder>, headers: HeaderMap, Json(body): Json<Value>| async move {
        recorder.record(headers, body);
        Json(json!({"success": true, "id": recorder.call_count()}))
    };
    let router = Router::new()
        .route("/api/analytics", post(handler))
        .route("/api/time-savings", post(handler))
        .with_state(recorder);
    serve(router).await
}

#[tokio::test]
async fn test_track_posts_flat_event() -> anyhow::Result<()> {
    let recorder = Recorder::default();
    let base = collector(recorder.clone()).await?;
    let client = AnalyticsClient::new(base, true);

    let id = client
        .track("outline_generated", json!({"slides": 5, "model": "gpt-4o-mini"}))
        .await;
    assert_eq!(id, Some(1));

    let (_, body) = recorder.last().unwrap();
    assert_eq!(body["event"], "outline_generated");
    assert_eq!(body["slides"], 5);
    assert_eq!(body["session_id"], client.session_id());
    assert!(body["timestamp"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_record_time_savings() -> anyhow::Result<()> {
    let recorder = Recorder::default();
    let base = collector(recorder.clone()).await?;
    let client = AnalyticsClient::new(base, true);

    let savings = TimeSavings {
        model: "gpt-4o".to_string(),
        slide_count: 8,
        elapsed_ms: 4200,
        notes_length: 640,
    };
    assert!(client.record_time_savings(&savings).await.is_some());

    let (_, body) = recorder.last().unwrap();
    assert_eq!(body["slide_count"], 8);
    assert_eq!(body["elapsed_ms"], 4200);
    Ok(())
}

#[tokio::test]
async fn test_disabled_client_sends_nothing() -> anyhow::Result<()> {
    let recorder = Recorder::default();
    let base = collector(recorder.clone()).await?;

    assert_eq!(AnalyticsClient::new(base, false).track("x", json!({})).await, None);
    assert_eq!(AnalyticsClient::disabled().track("x", json!({})).await, None);
    assert_eq!(recorder.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_collector_is_swallowed() {
    let client = AnalyticsClient::new("http://127.0.0.1:9", true);
    assert_eq!(client.track("x", json!({"a": 1})).await, None);
}

#[tokio::test]
async fn test_silent_collector_does_not_hang() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/api/time-savings",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!({"success": true, "id": 1}))
        }),
    );
    let base = serve(router).await?;
    let client = AnalyticsClient::new(base, true).with_timeout(Duration::from_millis(100));

    let savings = TimeSavings {
        model: "gpt-4o".to_string(),
        slide_count: 3,
        elapsed_ms: 900,
        notes_length: 200,
    };
    let id = tokio::time::timeout(Duration::from_secs(5), client.record_time_savings(&savings))
        .await
        .expect("analytics call should give up on its own");
    assert_eq!(id, None);
    Ok(())
}
