//! # Shellbroker Telemetry
//!
//! Logging for the shell-brokering server.

pub mod logging;
