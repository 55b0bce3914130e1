//! Tests for shutdown signalling

use super::shutdown::*;
use std::time::Duration;

#[tokio::test]
async fn test_shutdown_channel_initially_not_shutdown() {
    let (_controller, signal) = shutdown_channel();

    assert!(!signal.is_shutdown());
}

#[tokio::test]
async fn test_shutdown_channel_triggers_shutdown() {
    let (controller, signal) = shutdown_channel();

    assert!(!signal.is_shutdown());

    controller.shutdown();

    assert!(signal.is_shutdown());
}

/// Test that wait completes when shutdown is triggered
#[tokio::test]
async fn test_shutdown_wait_completes_on_signal() {
    let (controller, mut signal) = shutdown_channel();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.shutdown();
    });

    let result = tokio::time::timeout(Duration::from_secs(1), signal.wait()).await;

    assert!(
        result.is_ok(),
        "wait() should complete when shutdown triggered"
    );
    assert!(signal.is_shutdown());
}

/// A signal cloned after shutdown still sees it
#[tokio::test]
async fn test_wait_after_shutdown_returns_immediately() {
    let (controller, signal) = shutdown_channel();
    controller.shutdown();

    let mut late = signal.clone();
    let result = tokio::time::timeout(Duration::from_millis(100), late.wait()).await;

    assert!(result.is_ok());
}

/// Dropping the controller releases waiters
#[tokio::test]
async fn test_wait_completes_when_controller_dropped() {
    let (controller, mut signal) = shutdown_channel();
    drop(controller);

    let result = tokio::time::timeout(Duration::from_secs(1), signal.wait()).await;

    assert!(result.is_ok());
    assert!(!signal.is_shutdown(), "drop is not an explicit shutdown");
}

/// Shutting down twice is harmless
#[tokio::test]
async fn test_shutdown_is_idempotent() {
    let (controller, signal) = shutdown_channel();

    controller.shutdown();
    controller.shutdown();

    assert!(signal.is_shutdown());
}

#[tokio::test]
async fn test_shutdown_signal_clones_share_state() {
    let (controller, signal) = shutdown_channel();
    let signal2 = signal.clone();
    let signal3 = signal.clone();

    assert!(!signal.is_shutdown());
    assert!(!signal2.is_shutdown());
    assert!(!signal3.is_shutdown());

    controller.shutdown();

    assert!(signal.is_shutdown());
    assert!(signal2.is_shutdown());
    assert!(signal3.is_shutdown());
}
