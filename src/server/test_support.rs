//! Helpers for running a real stub server inside tests

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// A stub server serving on an ephemeral loopback port
pub struct TestServer {
    pub addr: SocketAddr,
    pub controller: ShutdownController,
    pub handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Fire shutdown and wait for `serve` to return
    pub async fn stop(self) -> Result<(), ServerError> {
        self.controller.shutdown();
        tokio::time::timeout(std::time::Duration::from_secs(10), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked")
    }
}

/// Bind on 127.0.0.1:0 and serve in the background
///
/// The listener is bound before this returns, so requests can be sent
/// immediately.
pub async fn spawn_server(readiness: ReadinessState, device_ids: &[&str]) -> TestServer {
    let ids: Vec<String> = device_ids.iter().map(|id| id.to_string()).collect();
    let server = StubServer::bind(SocketAddr::from(([127, 0, 0, 1], 0)), readiness, &ids)
        .await
        .expect("bind test server");
    let addr = server.local_addr();
    let (controller, signal) = shutdown_channel();
    let handle = tokio::spawn(server.serve(signal));
    TestServer {
        addr,
        controller,
        handle,
    }
}
