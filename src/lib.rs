//! Stub of an accelerator-actuation agent
//!
//! Serves a tiny HTTP control plane that can be toggled between ready and
//! unready, and that reports the accelerator IDs it was started with.

pub mod api;
pub mod config;
pub mod server;
