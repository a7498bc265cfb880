//! Tests for the render service client.

mod test_utils;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use podium_core::{Outline, Slide};
use podium_error::{PodiumErrorKind, RenderErrorKind};
use podium_gateway::RenderServiceClient;
use podium_interface::PresentationRenderer;
use serde_json::{Value, json};
use test_utils::{Recorder, serve};

const FAKE_PPTX: &[u8] = b"PK\x03\x04fake-presentation";

async fn render_server(recorder: Recorder) -> anyhow::Result<String> {
    let router = Router::new()
        .route("/status", get(|| async { Json(json!({"status": "ok"})) }))
        .route(
            "/update-powerpoint",
            post(
                |State(recorder): State<Recorder>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    recorder.record(headers, body);
                    FAKE_PPTX.to_vec()
                },
            ),
        )
        .route(
            "/extract-powerpoint",
            post(
                |State(recorder): State<Recorder>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    recorder.record(headers, body);
                    Json(json!({
                        "slides": [
                            {"slide_number": 1, "title": "Welcome", "content": ["Hello"]},
                            {"slide_number": 2, "title": "", "content": []}
                        ]
                    }))
                },
            ),
        )
        .with_state(recorder);
    serve(router).await
}

fn outline() -> Outline {
    let mut intro = Slide::new(1, "Intro");
    intro.bullets = Some(vec!["Why".to_string()]);
    Outline::new(vec![intro, Slide::new(2, "Details")])
}

#[tokio::test]
async fn test_status() -> anyhow::Result<()> {
    let base = render_server(Recorder::default()).await?;
    let status = RenderServiceClient::new(base).status().await?;
    assert!(status.is_ok());
    Ok(())
}

#[tokio::test]
async fn test_render_new_presentation() -> anyhow::Result<()> {
    let recorder = Recorder::default();
    let base = render_server(recorder.clone()).await?;

    let bytes = RenderServiceClient::new(format!("{}/", base))
        .render(&outline(), None, "presentation-20240501-120000.pptx")
        .await?;
    assert_eq!(bytes, FAKE_PPTX);

    let (_, body) = recorder.last().unwrap();
    assert!(body["original_file"].is_null());
    assert_eq!(body["file_name"], "presentation-20240501-120000.pptx");
    assert_eq!(body["update_instructions"]["slides"][0]["title"], "Intro");
    assert_eq!(body["update_instructions"]["slides"][0]["bullets"][0], "Why");
    Ok(())
}

#[tokio::test]
async fn test_render_onto_template() -> anyhow::Result<()> {
    let recorder = Recorder::default();
    let base = render_server(recorder.clone()).await?;

    RenderServiceClient::new(base)
        .render(&outline(), Some(b"template-bytes"), "deck.pptx")
        .await?;

    let (_, body) = recorder.last().unwrap();
    let encoded = body["original_file"].as_str().unwrap();
    assert_eq!(STANDARD.decode(encoded)?, b"template-bytes");
    Ok(())
}

#[tokio::test]
async fn test_render_failure_reports_service_error() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/update-powerpoint",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "no layouts"})),
            )
        }),
    );
    let base = serve(router).await?;

    let err = RenderServiceClient::new(base)
        .render(&outline(), None, "deck.pptx")
        .await
        .unwrap_err();
    match err.kind() {
        PodiumErrorKind::Render(e) => assert_eq!(
            e.kind,
            RenderErrorKind::Status {
                status: 500,
                message: "no layouts".to_string()
            }
        ),
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_extract() -> anyhow::Result<()> {
    let recorder = Recorder::default();
    let base = render_server(recorder.clone()).await?;

    let slides = RenderServiceClient::new(base).extract(FAKE_PPTX).await?;
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].title, "Welcome");
    assert_eq!(slides[0].content, vec!["Hello".to_string()]);
    assert_eq!(slides[1].slide_number, 2);

    let (_, body) = recorder.last().unwrap();
    assert_eq!(
        STANDARD.decode(body["file_data"].as_str().unwrap())?,
        FAKE_PPTX
    );
    Ok(())
}
