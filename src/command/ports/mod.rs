//! Port trait definitions for the command subsystem.
//!
//! Every collaborator the router and job runner depend on is reached through
//! one of these traits: the host platform, the usage policy, the summarizer,
//! the image generator, and the background executor.

pub mod authorizer;
pub mod channel;
pub mod dispatcher;
pub mod generator;
pub mod publisher;
pub mod registrar;
pub mod thread;

pub use authorizer::{AuthorizationError, AuthorizationResult, Authorizer};
pub use channel::{ChannelDirectory, ChannelLookupError, ChannelLookupResult};
pub use dispatcher::{Dispatched, JobDispatcher};
pub use generator::{GeneratorError, GeneratorResult, ImageGenerator};
pub use publisher::{PublishError, PublishResult, Publisher};
pub use registrar::{CommandRegistrar, RegistrationError, RegistrationResult};
pub use thread::{ThreadStartError, ThreadStartResult, ThreadStarter};
