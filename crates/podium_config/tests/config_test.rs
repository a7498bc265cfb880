//! Tests for the layered configuration store.

use podium_config::PodiumConfig;
use podium_core::AuthType;
use podium_error::{ConfigErrorKind, PodiumErrorKind};
use std::io::Write;

fn key(_: &str) -> Option<String> {
    Some("sk-test".to_string())
}

#[test]
fn test_load_bundled_defaults() {
    let config = PodiumConfig::bundled().unwrap();

    assert_eq!(config.gateway.endpoint, "/chat/completions");
    assert_eq!(config.gateway.auth, "bearer");
    assert_eq!(config.min_notes_length(), 100);
    assert!(!config.analytics.enabled);
    assert!(config.audiences.contains_key("executive"));
}

#[test]
fn test_resolve_default_model() {
    let config = PodiumConfig::bundled().unwrap();
    let ai = config.resolve_with(None, key).unwrap();

    assert_eq!(ai.model(), "gpt-4o-mini");
    assert_eq!(ai.url(), "https://api.openai.com/v1/chat/completions");
    assert_eq!(*ai.auth_type(), AuthType::Bearer);
    assert_eq!(*ai.max_tokens(), 4000);
}

#[test]
fn test_resolve_by_gateway_id() {
    let config = PodiumConfig::bundled().unwrap();
    let ai = config
        .resolve_with(Some("claude-3-5-sonnet-latest"), key)
        .unwrap();
    assert_eq!(ai.model(), "claude-3-5-sonnet-latest");
}

#[test]
fn test_resolve_unknown_model() {
    let config = PodiumConfig::bundled().unwrap();
    let err = config.resolve_with(Some("gpt-9"), key).unwrap_err();
    match err.kind() {
        PodiumErrorKind::Config(e) => {
            assert_eq!(e.kind, ConfigErrorKind::UnknownModel("gpt-9".to_string()))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_resolve_requires_api_key() {
    let config = PodiumConfig::bundled().unwrap();
    let err = config.resolve_with(None, |_| None).unwrap_err();
    assert!(matches!(
        err.kind(),
        PodiumErrorKind::Config(e) if matches!(e.kind, ConfigErrorKind::MissingApiKey(_))
    ));

    let err = config
        .resolve_with(None, |_| Some("   ".to_string()))
        .unwrap_err();
    assert!(matches!(err.kind(), PodiumErrorKind::Config(_)));
}

#[test]
fn test_from_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[gateway]
url = "https://gateway.internal"
auth = "google-header"
api_key_env = "GATEWAY_TOKEN"

[generation]
default_model = "fast"
temperature = 0.2
max_tokens = 2000
timeout_ms = 5000

[models.fast]
id = "gemini-2.0-flash"
name = "Gemini Flash"
provider = "Google"
quality = "fast"
max_tokens = 1000
"#
    )
    .unwrap();

    let config = PodiumConfig::from_file(file.path()).unwrap();
    // Bundled models survive underneath the override
    assert!(config.models.contains_key("gpt-4o"));

    let ai = config
        .resolve_with(None, |name| {
            assert_eq!(name, "GATEWAY_TOKEN");
            Some("g-key".to_string())
        })
        .unwrap();
    assert_eq!(*ai.auth_type(), AuthType::GoogleHeader);
    assert_eq!(*ai.max_tokens(), 1000);
    assert_eq!(*ai.temperature(), 0.2);
    assert_eq!(*ai.timeout_ms(), 5000);
}

#[test]
fn test_resolve_rejects_unknown_auth() {
    let mut config = PodiumConfig::bundled().unwrap();
    config.gateway.auth = "basic".to_string();
    let err = config.resolve_with(None, key).unwrap_err();
    assert!(matches!(
        err.kind(),
        PodiumErrorKind::Config(e) if e.kind == ConfigErrorKind::UnknownAuthType("basic".to_string())
    ));
}

#[test]
fn test_resolve_rejects_out_of_range_temperature() {
    let mut config = PodiumConfig::bundled().unwrap();
    config.generation.temperature = 1.7;
    assert!(config.resolve_with(None, key).is_err());
}

#[test]
fn test_audience_modifier() {
    let config = PodiumConfig::bundled().unwrap();

    let executive = config.audience_modifier("executive").unwrap();
    assert!(executive.contains("executives"));

    assert_eq!(
        config.audience_modifier("  Board of directors  ").as_deref(),
        Some("Board of directors")
    );
    assert_eq!(config.audience_modifier("   "), None);
}

#[test]
fn test_model_info_and_keys() {
    let config = PodiumConfig::bundled().unwrap();
    let info = config.model_info("gpt-4o").unwrap();
    assert_eq!(info.provider, "OpenAI");
    assert!(config.model_info("missing").is_none());

    let keys = config.model_keys();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
