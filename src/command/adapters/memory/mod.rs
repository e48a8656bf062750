//! In-memory adapter implementations.
//!
//! These adapters stand in for the host platform, usage policy, summarizer,
//! and image backend. They record what they receive so tests can assert on
//! side effects, and each can be configured to fail.

mod channel;
mod dispatcher;
mod generator;
mod policy;
mod publisher;
mod registrar;
mod thread;

pub use channel::InMemoryChannelDirectory;
pub use dispatcher::RecordingJobDispatcher;
pub use generator::InMemoryImageGenerator;
pub use policy::InMemoryUsagePolicy;
pub use publisher::{InMemoryPublisher, PublisherCall, StoredFile, StoredPost};
pub use registrar::InMemoryCommandRegistrar;
pub use thread::{InMemoryThreadStarter, ThreadStartCall};
