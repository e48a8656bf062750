//! Slash-command dispatch for the `/summarize` and `/imagine` commands.
//!
//! A raw command line is parsed into a verb and an argument, authorized
//! against the usage policy, and routed:
//!
//! - `/summarize` inside a thread starts a summary thread synchronously and
//!   redirects the user to it; outside a thread it answers with an ephemeral
//!   notice.
//! - `/imagine <prompt>` hands a [`domain::GenerationJob`] to a
//!   [`ports::JobDispatcher`] and answers immediately. The job generates an
//!   image, encodes it as PNG, uploads it and posts the result. Job failures
//!   are logged and never reach the invoking request.
//!
//! # Architecture
//!
//! - **Domain**: parsing, verbs, outcomes and the job state machine
//!   ([`domain`])
//! - **Ports**: host platform, usage policy, summarizer, generator and
//!   executor contracts ([`ports`])
//! - **Adapters**: in-memory stand-ins and the tokio dispatcher
//!   ([`adapters`])
//! - **Services**: [`services::CommandRouter`] and
//!   [`services::GenerationJobRunner`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use atelier::command::{
//!     adapters::memory::{
//!         InMemoryChannelDirectory, InMemoryThreadStarter, InMemoryUsagePolicy,
//!         RecordingJobDispatcher,
//!     },
//!     config::CommandConfig,
//!     domain::{Channel, ChannelId, ChannelKind, CommandInvocation, CommandOutcome, UserId},
//!     services::CommandRouter,
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
//! let channel_id = ChannelId::new("town-square").expect("valid id");
//! let channels = InMemoryChannelDirectory::new()
//!     .with_channel(Channel::new(channel_id.clone(), "Town Square", ChannelKind::Open));
//! let dispatcher = Arc::new(RecordingJobDispatcher::new());
//! let router = CommandRouter::new(
//!     Arc::new(channels),
//!     Arc::new(InMemoryUsagePolicy::allow_all()),
//!     Arc::new(InMemoryThreadStarter::new()),
//!     Arc::clone(&dispatcher),
//!     Arc::new(CommandConfig::default()),
//! );
//!
//! let invocation = CommandInvocation::new(
//!     "/imagine a red fox",
//!     UserId::new("alice").expect("valid id"),
//!     channel_id,
//! );
//! let outcome = router.route(&invocation).await.expect("authorized");
//!
//! assert_eq!(outcome, CommandOutcome::ephemeral("Generating image, please wait."));
//! assert_eq!(dispatcher.jobs().len(), 1);
//! # });
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
