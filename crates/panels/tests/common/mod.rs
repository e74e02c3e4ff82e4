//! Shared mock console API for panel integration tests.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::routing::{get, MethodRouter};
use axum::Router;
use serde_json::{json, Value};

use wharf_client::api::{BACKUP_STATUS_PATH, LICENSES_INFO_PATH, SYSTEM_NODES_PATH};

/// Builder for a mock console serving canned responses on the three
/// status endpoints. Defaults are benign: a roomy license, one node,
/// and a clean backup.
pub struct MockConsole {
    licenses: (StatusCode, Value),
    nodes: (StatusCode, Value),
    backup: (StatusCode, Value),
}

impl MockConsole {
    pub fn new() -> Self {
        Self {
            licenses: (StatusCode::OK, json!({ "nodes": 10, "type": 2 })),
            nodes: (StatusCode::OK, json!({ "nodes": 1 })),
            backup: (StatusCode::OK, json!({ "Failed": false })),
        }
    }

    pub fn licenses(mut self, status: StatusCode, body: Value) -> Self {
        self.licenses = (status, body);
        self
    }

    pub fn nodes(mut self, status: StatusCode, body: Value) -> Self {
        self.nodes = (status, body);
        self
    }

    pub fn backup(mut self, status: StatusCode, body: Value) -> Self {
        self.backup = (status, body);
        self
    }

    /// Bind on an ephemeral port and return the base URL. The server
    /// task runs until the test process exits.
    pub async fn serve(self) -> String {
        let app = Router::new()
            .route(LICENSES_INFO_PATH, canned(self.licenses))
            .route(SYSTEM_NODES_PATH, canned(self.nodes))
            .route(BACKUP_STATUS_PATH, canned(self.backup));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock console listener");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

/// Route handler returning a fixed status and JSON body.
fn canned((status, body): (StatusCode, Value)) -> MethodRouter {
    get(move || {
        let body = body.clone();
        async move { (status, Json(body)) }
    })
}
