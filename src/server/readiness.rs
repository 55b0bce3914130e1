//! Shared ready/unready flag of the stub agent

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared state for readiness tracking
///
/// Clones share the same flag, so the caller can keep one clone to observe
/// what the HTTP handlers do to it. Concurrent writers race; the last store
/// wins and readers never see anything but `true` or `false`.
#[derive(Debug, Clone)]
pub struct ReadinessState {
    ready: Arc<AtomicBool>,
}

impl ReadinessState {
    /// Create a new readiness state (initially not ready)
    pub fn new() -> Self {
        Self::with_initial(false)
    }

    /// Create a readiness state starting at `ready`
    pub fn with_initial(ready: bool) -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(ready)),
        }
    }

    /// Overwrite the flag
    pub fn set(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Mark the agent as ready
    pub fn set_ready(&self) {
        self.set(true);
    }

    /// Mark the agent as not ready
    pub fn set_not_ready(&self) {
        self.set(false);
    }

    /// Check if the agent is ready
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

impl Default for ReadinessState {
    fn default() -> Self {
        Self::new()
    }
}
