//! Tests for the cancellation token.

use podium_core::CancellationToken;
use std::time::Duration;

#[tokio::test]
async fn test_cancel_wakes_waiter() {
    let token = CancellationToken::new();
    let waiter = token.clone();
    let handle = tokio::spawn(async move {
        waiter.cancelled().await;
        true
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    token.cancel();

    let woke = tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("waiter should wake")
        .unwrap();
    assert!(woke);
}

#[tokio::test]
async fn test_already_cancelled_resolves_immediately() {
    let token = CancellationToken::new();
    token.cancel();
    tokio::time::timeout(Duration::from_millis(100), token.cancelled())
        .await
        .expect("cancelled token should resolve at once");
}

#[test]
fn test_clones_share_state() {
    let token = CancellationToken::new();
    let other = token.clone();
    assert!(!other.is_cancelled());
    token.cancel();
    assert!(other.is_cancelled());
}
