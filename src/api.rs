//! HTTP paths of the actuation agent API
//!
//! These are shared with the real agent and its clients. Handlers and tests
//! refer to them by name only.

/// POST here to make the agent report ready
pub const BECOME_READY_PATH: &str = "/v1/become-ready";

/// POST here to make the agent report unready
pub const BECOME_UNREADY_PATH: &str = "/v1/become-unready";

/// GET here for the JSON array of accelerator IDs managed by the agent
pub const ACCELERATOR_QUERY_PATH: &str = "/v1/dual-pods/accelerators";

/// Liveness probe
pub const HEALTHZ_PATH: &str = "/healthz";

/// Readiness probe, 200 when ready and 503 otherwise
pub const READYZ_PATH: &str = "/readyz";
