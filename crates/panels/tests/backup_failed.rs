//! Integration tests for the backup failure panel.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::MockConsole;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wharf_client::ConsoleApi;
use wharf_panels::backup_failed::BACKUP_DOCS_URL;
use wharf_panels::{BackupFailedPanel, Severity};

async fn panel_for(console: MockConsole) -> BackupFailedPanel {
    let api = Arc::new(ConsoleApi::new(console.serve().await));
    BackupFailedPanel::new(api)
}

// ---------------------------------------------------------------------------
// Test: a failed backup shows the banner with the ISO date and docs link
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_backup_shows_banner_with_date() {
    let panel = panel_for(
        MockConsole::new().backup(StatusCode::OK, json!({ "Failed": true, "TimestampUTC": 1500 })),
    )
    .await;

    let banner = panel
        .check(&CancellationToken::new())
        .await
        .expect("banner should be shown");

    assert_eq!(banner.severity, Severity::Warning);
    assert!(
        banner.message.contains("1970-01-01"),
        "Message should contain the ISO date of the failed attempt: {}",
        banner.message
    );
    assert_eq!(
        banner.message,
        "The latest automated backup has failed at 1970-01-01. For details \
         please see the log files and have a look at the documentation."
    );

    let link = banner.link.expect("banner should carry the docs link");
    assert_eq!(link.label, "documentation");
    assert_eq!(link.url, BACKUP_DOCS_URL);
}

// ---------------------------------------------------------------------------
// Test: a clean backup shows nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clean_backup_shows_nothing() {
    // The console omits TimestampUTC when nothing has failed.
    let panel = panel_for(MockConsole::new().backup(StatusCode::OK, json!({ "Failed": false })))
        .await;

    assert!(panel.check(&CancellationToken::new()).await.is_none());
}

// ---------------------------------------------------------------------------
// Test: failures suppress the banner
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backup_endpoint_failure_shows_nothing() {
    let panel = panel_for(MockConsole::new().backup(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "unavailable" }),
    ))
    .await;

    assert!(panel.check(&CancellationToken::new()).await.is_none());
}

#[tokio::test]
async fn invalid_backup_payload_shows_nothing() {
    let panel = panel_for(
        MockConsole::new().backup(StatusCode::OK, json!({ "Failed": true, "TimestampUTC": -7 })),
    )
    .await;

    assert!(panel.check(&CancellationToken::new()).await.is_none());
}

#[tokio::test]
async fn cancelled_check_shows_nothing() {
    let panel = panel_for(
        MockConsole::new().backup(StatusCode::OK, json!({ "Failed": true, "TimestampUTC": 1500 })),
    )
    .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    assert!(panel.check(&cancel).await.is_none());
}

// ---------------------------------------------------------------------------
// Test: repeated checks over unchanged responses are idempotent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_checks_yield_identical_banners() {
    let panel = panel_for(
        MockConsole::new().backup(StatusCode::OK, json!({ "Failed": true, "TimestampUTC": 1500 })),
    )
    .await;

    let cancel = CancellationToken::new();
    let first = panel.check(&cancel).await;
    let second = panel.check(&cancel).await;
    assert!(first.is_some());
    assert_eq!(first, second);
}
