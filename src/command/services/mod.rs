//! Application services for the command subsystem.
//!
//! Services orchestrate the ports: the router owns the synchronous request
//! path and the job runner owns the detached generation path.

mod job_runner;
mod registration;
mod router;

pub use job_runner::GenerationJobRunner;
pub use registration::register_commands;
pub use router::CommandRouter;
