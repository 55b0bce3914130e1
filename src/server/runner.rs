//! Listener lifecycle of the stub server
//!
//! `Idle -> Listening -> ShuttingDown -> Stopped`. Binding moves the server to
//! `Listening`, the shutdown signal moves it to `ShuttingDown`, and `serve`
//! consumes the server so it can never listen again.

use crate::config::{parse_port, ConfigError};
use crate::server::handlers::{build_router, StubState};
use crate::server::readiness::ReadinessState;
use crate::server::registry::DeviceRegistry;
use crate::server::shutdown::ShutdownSignal;
use axum::Router;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// How long in-flight requests may run after shutdown is signaled
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    InvalidPort(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read bound address: {0}")]
    LocalAddr(#[source] std::io::Error),

    #[error("Server terminated unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
}

/// A bound, not yet serving, stub server
pub struct StubServer {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
    grace_period: Duration,
}

impl StubServer {
    /// Bind the listener and wire the handlers
    ///
    /// `device_ids` is copied; later changes to the caller's list are not
    /// seen by the server. A bind failure is returned as is, without retry.
    pub async fn bind(
        addr: SocketAddr,
        readiness: ReadinessState,
        device_ids: &[String],
    ) -> Result<Self, ServerError> {
        let devices = DeviceRegistry::new(device_ids.iter().cloned());
        let router = build_router(StubState::new(readiness, devices));

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr().map_err(ServerError::LocalAddr)?;
        // Log after successful bind - server is actually listening
        info!(addr = %local_addr, devices = device_ids.len(), "Stub server listening");

        Ok(Self {
            listener,
            router,
            local_addr,
            grace_period: DEFAULT_GRACE_PERIOD,
        })
    }

    /// Override the drain bound used on shutdown
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Address the listener is bound to (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until `shutdown` fires, then drain and stop
    ///
    /// Returns `Ok(())` once the listener is released after shutdown, even if
    /// the grace period ran out before every connection finished.
    pub async fn serve(self, mut shutdown: ShutdownSignal) -> Result<(), ServerError> {
        let Self {
            listener,
            router,
            local_addr,
            grace_period,
        } = self;

        let mut drain_signal = shutdown.clone();
        let server = axum::serve(listener, router)
            .with_graceful_shutdown(async move { drain_signal.wait().await })
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => {
                info!(addr = %local_addr, "Stub server stopped");
                return result.map_err(ServerError::Serve);
            }
            _ = shutdown.wait() => {}
        }

        info!(
            addr = %local_addr,
            grace_ms = grace_period.as_millis() as u64,
            "Stub server shutting down"
        );

        match tokio::time::timeout(grace_period, server).await {
            Ok(result) => {
                result.map_err(ServerError::Serve)?;
                info!(addr = %local_addr, "Stub server stopped");
            }
            Err(_) => {
                // Connection tasks are spawned by axum and run on their own
                warn!(
                    addr = %local_addr,
                    "Grace period elapsed, no longer waiting for in-flight connections"
                );
            }
        }
        Ok(())
    }
}

/// Run the stub server on all interfaces until `shutdown` fires
///
/// # Arguments
/// * `shutdown` - Signal that ends the server
/// * `port` - The port to listen on, as text (e.g. `"28083"`)
/// * `readiness` - Flag toggled by the become-ready/unready endpoints
/// * `device_ids` - Accelerator IDs reported by the query endpoint, in order
pub async fn run_stub_server(
    shutdown: ShutdownSignal,
    port: &str,
    readiness: ReadinessState,
    device_ids: &[String],
) -> Result<(), ServerError> {
    let port = parse_port(port)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    StubServer::bind(addr, readiness, device_ids)
        .await?
        .serve(shutdown)
        .await
}
