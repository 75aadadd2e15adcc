//! Route handlers for the public API surface.

use std::env;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::observability::Logger;
use crate::schema::SchemaRegistry;
use crate::store::DocumentStore;

use super::config::{DATABASE_NAME_VAR, DATABASE_URL_VAR};
use super::errors::ApiResult;

/// State shared by all request handlers.
///
/// Read-only after construction: a single store handle and the static
/// schema registry.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub schemas: SchemaRegistry,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            schemas: SchemaRegistry::builtin(),
        }
    }
}

/// Builds the public API router.
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/hello", get(hello_handler))
        .route("/test", get(diagnostics_handler))
        .route("/schema", get(schema_handler))
        .route("/api/request", post(create_request_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

/// Liveness probe.
async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Smart Presence API is live".to_string(),
    })
}

async fn hello_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from Smart Presence backend".to_string(),
    })
}

/// Body of the `/test` diagnostics endpoint.
///
/// Probe failures are reported inside this body; the endpoint itself
/// always answers 200.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

async fn diagnostics_handler(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let status = state.store.status().await;

    Json(DiagnosticsResponse {
        backend: "running".to_string(),
        database: status.detail,
        database_url: env_flag(DATABASE_URL_VAR),
        database_name: env_flag(DATABASE_NAME_VAR),
        connection_status: if status.connected {
            "connected".to_string()
        } else {
            "not connected".to_string()
        },
        collections: status.collections,
    })
}

fn env_flag(var: &str) -> String {
    if env::var(var).is_ok() {
        "set".to_string()
    } else {
        "not set".to_string()
    }
}

/// Expose the declared schemas for client tooling.
async fn schema_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.schemas.describe_all())
}

/// Success body for `/api/request`.
#[derive(Debug, Serialize)]
pub struct CreateRequestResponse {
    pub status: String,
    pub id: String,
}

/// Accept a request ticket, validate it, and persist it.
async fn create_request_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<CreateRequestResponse>> {
    let schema = state.schemas.request_ticket();

    let record = match schema.validate(&payload) {
        Ok(record) => record,
        Err(err) => {
            let issue_count = err.issues().len().to_string();
            Logger::warn(
                "request_rejected",
                &[("collection", schema.name.as_str()), ("issues", &issue_count)],
            );
            return Err(err.into());
        }
    };

    let id = match state.store.insert(&schema.name, &record).await {
        Ok(id) => id,
        Err(err) => {
            let cause = err.to_string();
            Logger::error(
                "persistence_failed",
                &[("collection", schema.name.as_str()), ("cause", &cause)],
            );
            return Err(err.into());
        }
    };

    Logger::info(
        "request_persisted",
        &[("collection", schema.name.as_str()), ("id", &id)],
    );

    Ok(Json(CreateRequestResponse {
        status: "ok".to_string(),
        id,
    }))
}
