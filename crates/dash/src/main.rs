//! `wharf-dash` -- home-view notification check utility.
//!
//! Polls a console's status endpoints, evaluates the home-view warning
//! panels, and prints any active banners to stdout.  With an interval
//! configured it keeps re-checking until Ctrl-C.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default | Description                            |
//! |-----------------------|----------|---------|----------------------------------------|
//! | `CONSOLE_API_URL`     | yes      | --      | Base URL, e.g. `http://localhost:9000` |
//! | `WATCH_INTERVAL_SECS` | no       | `0`     | Seconds between checks; `0` = run once |

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wharf_client::ConsoleApi;
use wharf_panels::HomePanels;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wharf_dash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = std::env::var("CONSOLE_API_URL").unwrap_or_else(|_| {
        tracing::error!("CONSOLE_API_URL environment variable is required");
        std::process::exit(1);
    });

    let interval_secs: u64 = std::env::var("WATCH_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    tracing::info!(api_url = %api_url, interval_secs, "Starting wharf-dash");

    let api = Arc::new(ConsoleApi::new(api_url));
    let panels = HomePanels::new(api);
    let cancel = CancellationToken::new();

    if interval_secs == 0 {
        report(&panels, &cancel).await;
        return;
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                report(&panels, &cancel).await;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                cancel.cancel();
                break;
            }
        }
    }
}

/// Run every panel check and print the active banners.
async fn report(panels: &HomePanels, cancel: &CancellationToken) {
    let banners = panels.check_all(cancel).await;

    if banners.is_empty() {
        tracing::info!("No active warnings");
        return;
    }

    for banner in banners {
        match &banner.link {
            Some(link) => println!(
                "[{}] {} ({}: {})",
                banner.severity.as_str(),
                banner.message,
                link.label,
                link.url
            ),
            None => println!("[{}] {}", banner.severity.as_str(), banner.message),
        }
    }
}
