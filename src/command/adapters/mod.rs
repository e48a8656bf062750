//! Adapters for the command subsystem.
//!
//! - [`memory`]: in-memory stand-ins for every port, used by tests and the
//!   demo binary
//! - [`runtime::TokioJobDispatcher`]: runs generation jobs as detached tokio
//!   tasks

pub mod memory;
pub mod runtime;
