//! HTTP server of the stub actuation agent
//!
//! Exposes the become-ready/become-unready toggles, the accelerator query,
//! and liveness/readiness probes. Runs until a `ShutdownSignal` fires.

mod handlers;
mod readiness;
mod registry;
mod runner;
pub mod shutdown;

pub use handlers::{build_router, StubState};
pub use readiness::ReadinessState;
pub use registry::DeviceRegistry;
pub use runner::{run_stub_server, ServerError, StubServer, DEFAULT_GRACE_PERIOD};
pub use shutdown::{shutdown_channel, wait_for_signal, ShutdownController, ShutdownSignal};

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "readiness_test.rs"]
mod readiness_tests;

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_tests;

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_tests;

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_tests;

#[cfg(test)]
#[path = "shutdown_test.rs"]
mod shutdown_tests;
