//! Tests for the collector's HTTP routes.

use podium_gateway::{AnalyticsClient, TimeSavings};
use podium_server::{AnalyticsStore, ApiState, create_router};
use serde_json::{Value, json};
use std::sync::Arc;

async fn start() -> anyhow::Result<(String, Arc<AnalyticsStore>)> {
    let store = Arc::new(AnalyticsStore::in_memory()?);
    let router = create_router(ApiState::new(store.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok((format!("http://{}", addr), store))
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let (url, _store) = start().await?;

    let body: Value = reqwest::get(format!("{}/health", url)).await?.json().await?;

    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn test_event_is_stored() -> anyhow::Result<()> {
    let (url, store) = start().await?;

    let response = reqwest::Client::new()
        .post(format!("{}/api/analytics", url))
        .json(&json!({"event": "generate", "slides": 5}))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let ack: Value = response.json().await?;
    assert_eq!(ack["success"], true);
    assert_eq!(ack["id"], 1);
    assert_eq!(store.events()?, vec![json!({"event": "generate", "slides": 5})]);
    Ok(())
}

#[tokio::test]
async fn test_non_object_rejected() -> anyhow::Result<()> {
    let (url, store) = start().await?;

    let response = reqwest::Client::new()
        .post(format!("{}/api/time-savings", url))
        .json(&json!([1, 2, 3]))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert!(store.time_savings()?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_analytics_client_reaches_collector() -> anyhow::Result<()> {
    let (url, store) = start().await?;
    let client = AnalyticsClient::new(url, true);

    let event_id = client.track("render", json!({"slides": 3})).await;
    let savings_id = client
        .record_time_savings(&TimeSavings {
            model: "gpt-4o-mini".to_string(),
            slide_count: 3,
            elapsed_ms: 4200,
            notes_length: 640,
        })
        .await;

    assert_eq!(event_id, Some(1));
    assert_eq!(savings_id, Some(1));

    let events = store.events()?;
    assert_eq!(events[0]["event"], "render");
    assert_eq!(events[0]["session_id"], client.session_id());

    let savings = store.time_savings()?;
    assert_eq!(savings[0]["slide_count"], 3);
    assert_eq!(savings[0]["elapsed_ms"], 4200);
    Ok(())
}
