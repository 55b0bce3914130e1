//! Shutdown signalling for the stub server
//!
//! A `ShutdownController` fires once; every clone of the paired
//! `ShutdownSignal` observes it. The binary fires it on SIGTERM/SIGINT,
//! tests fire it directly.

use tokio::sync::watch;
use tracing::info;

/// Receiving side of the shutdown channel
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    receiver: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Wait for shutdown signal
    ///
    /// Also returns if the controller is dropped.
    pub async fn wait(&mut self) {
        while !*self.receiver.borrow() {
            if self.receiver.changed().await.is_err() {
                // Sender dropped, treat as shutdown
                break;
            }
        }
    }

    /// Check if shutdown was signaled (non-blocking)
    pub fn is_shutdown(&self) -> bool {
        *self.receiver.borrow()
    }
}

/// Sending side of the shutdown channel
#[derive(Debug)]
pub struct ShutdownController {
    sender: watch::Sender<bool>,
}

impl ShutdownController {
    /// Trigger shutdown
    pub fn shutdown(&self) {
        // send_replace never fails, even with no receivers left
        self.sender.send_replace(true);
        info!("Shutdown signal sent");
    }
}

/// Create a new shutdown signal pair
pub fn shutdown_channel() -> (ShutdownController, ShutdownSignal) {
    let (sender, receiver) = watch::channel(false);
    (ShutdownController { sender }, ShutdownSignal { receiver })
}

/// Wait for SIGTERM or SIGINT and return the name of the one received
#[cfg(unix)]
pub async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let name = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };
    info!(signal = name, "Received termination signal");
    Ok(name)
}

/// Wait for Ctrl+C (Windows)
#[cfg(not(unix))]
pub async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    info!("Received Ctrl+C");
    Ok("CTRL_C")
}
