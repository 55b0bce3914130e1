//! Request handlers of the stub agent
//!
//! - `POST /v1/become-ready` - Mark the agent ready
//! - `POST /v1/become-unready` - Mark the agent not ready
//! - `GET /v1/dual-pods/accelerators` - JSON array of accelerator IDs
//! - `GET /healthz` - Liveness: Is the process alive?
//! - `GET /readyz` - Readiness: 200 when ready, 503 otherwise
//!
//! A known path hit with the wrong method gets 405, an unknown path gets 404.

use crate::api::{
    ACCELERATOR_QUERY_PATH, BECOME_READY_PATH, BECOME_UNREADY_PATH, HEALTHZ_PATH, READYZ_PATH,
};
use crate::server::readiness::ReadinessState;
use crate::server::registry::DeviceRegistry;
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tracing::{debug, error, info};

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct StubState {
    readiness: ReadinessState,
    devices: DeviceRegistry,
}

impl StubState {
    pub fn new(readiness: ReadinessState, devices: DeviceRegistry) -> Self {
        Self { readiness, devices }
    }
}

async fn become_ready(State(state): State<StubState>) -> StatusCode {
    state.readiness.set_ready();
    info!("Agent marked ready");
    StatusCode::OK
}

async fn become_unready(State(state): State<StubState>) -> StatusCode {
    state.readiness.set_not_ready();
    info!("Agent marked not ready");
    StatusCode::OK
}

/// Accelerator query handler
///
/// Encodes the registry in its original order. Encoding a list of strings
/// cannot realistically fail, but if it does the client gets a 500.
async fn accelerators(State(state): State<StubState>) -> Response {
    match serde_json::to_vec(state.devices.list()) {
        Ok(body) => {
            debug!(count = state.devices.len(), "Serving accelerator IDs");
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to encode accelerator IDs");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode accelerator IDs: {}", e),
            )
                .into_response()
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn readyz(State(state): State<StubState>) -> StatusCode {
    if state.readiness.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn not_found(uri: Uri) -> StatusCode {
    debug!(path = %uri.path(), "No route for request");
    StatusCode::NOT_FOUND
}

/// Build the router for the actuation endpoints and probes
pub fn build_router(state: StubState) -> Router {
    Router::new()
        .route(BECOME_READY_PATH, post(become_ready))
        .route(BECOME_UNREADY_PATH, post(become_unready))
        .route(ACCELERATOR_QUERY_PATH, get(accelerators))
        .route(HEALTHZ_PATH, get(healthz))
        .route(READYZ_PATH, get(readyz))
        .fallback(not_found)
        .with_state(state)
}
