//! Shared test helpers for in-memory command integration tests.

use async_trait::async_trait;
use atelier::command::{
    adapters::{
        memory::{
            InMemoryChannelDirectory, InMemoryImageGenerator, InMemoryPublisher,
            InMemoryThreadStarter, InMemoryUsagePolicy,
        },
        runtime::TokioJobDispatcher,
    },
    config::CommandConfig,
    domain::{Channel, ChannelId, ChannelKind, CommandInvocation, UserId},
    ports::{GeneratorResult, ImageGenerator},
    services::{CommandRouter, GenerationJobRunner},
};
use image::DynamicImage;
use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::{Handle, Runtime};
use tokio::sync::Semaphore;

/// Channel every test platform knows about.
pub const CHANNEL: &str = "town-square";

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Generator that holds every request until the test opens the gate.
#[derive(Debug, Clone)]
pub struct GatedGenerator {
    inner: InMemoryImageGenerator,
    gate: Arc<Semaphore>,
    entered: Arc<AtomicUsize>,
}

impl GatedGenerator {
    /// Creates a closed gate in front of `inner`.
    pub fn new(inner: InMemoryImageGenerator) -> Self {
        Self {
            inner,
            gate: Arc::new(Semaphore::new(0)),
            entered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns how many requests have reached the generator, gated or not.
    pub fn entered(&self) -> usize {
        self.entered.load(Ordering::SeqCst)
    }

    /// Lets `jobs` pending generation requests through.
    pub fn release(&self, jobs: usize) {
        self.gate.add_permits(jobs);
    }
}

#[async_trait]
impl ImageGenerator for GatedGenerator {
    async fn generate(&self, prompt: &str) -> GeneratorResult<DynamicImage> {
        self.entered.fetch_add(1, Ordering::SeqCst);
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
        self.inner.generate(prompt).await
    }
}

/// Router wired to a detached job dispatcher.
pub type PlatformRouter<G> = CommandRouter<
    InMemoryChannelDirectory,
    InMemoryUsagePolicy,
    InMemoryThreadStarter,
    TokioJobDispatcher<G, InMemoryPublisher, DefaultClock>,
>;

/// A fully wired in-memory chat platform.
pub struct Platform<G: ImageGenerator + 'static> {
    pub router: PlatformRouter<G>,
    pub dispatcher: Arc<TokioJobDispatcher<G, InMemoryPublisher, DefaultClock>>,
    pub channels: Arc<InMemoryChannelDirectory>,
    pub threads: Arc<InMemoryThreadStarter>,
    pub publisher: Arc<InMemoryPublisher>,
    pub generator: Arc<G>,
    pub policy: Arc<InMemoryUsagePolicy>,
}

impl<G: ImageGenerator + 'static> Platform<G> {
    /// Wires a platform around `generator` with the default policy and
    /// configuration.
    pub fn new(handle: Handle, generator: G) -> Self {
        Self::with_policy(handle, generator, InMemoryUsagePolicy::allow_all())
    }

    /// Wires a platform with a custom usage policy.
    pub fn with_policy(handle: Handle, generator: G, policy: InMemoryUsagePolicy) -> Self {
        Self::with_parts(handle, generator, policy, InMemoryPublisher::new())
    }

    /// Wires a platform with a custom usage policy and publisher.
    pub fn with_parts(
        handle: Handle,
        generator: G,
        policy: InMemoryUsagePolicy,
        publisher: InMemoryPublisher,
    ) -> Self {
        let config = Arc::new(CommandConfig::default());
        let generator = Arc::new(generator);
        let publisher = Arc::new(publisher);
        let threads = Arc::new(InMemoryThreadStarter::new());
        let policy = Arc::new(policy);
        let channels = Arc::new(InMemoryChannelDirectory::new().with_channel(Channel::new(
            channel_id(),
            "Town Square",
            ChannelKind::Open,
        )));

        let runner = Arc::new(GenerationJobRunner::new(
            Arc::clone(&generator),
            Arc::clone(&publisher),
            Arc::new(DefaultClock),
            Arc::clone(&config),
        ));
        let dispatcher = Arc::new(TokioJobDispatcher::new(runner, handle));
        let router = CommandRouter::new(
            Arc::clone(&channels),
            Arc::clone(&policy),
            Arc::clone(&threads),
            Arc::clone(&dispatcher),
            config,
        );

        Self {
            router,
            dispatcher,
            channels,
            threads,
            publisher,
            generator,
            policy,
        }
    }
}

/// Returns the known channel identifier.
pub fn channel_id() -> ChannelId {
    ChannelId::new(CHANNEL).expect("valid channel id")
}

/// Returns a user identifier.
pub fn user(name: &str) -> UserId {
    UserId::new(name).expect("valid user id")
}

/// Builds an invocation from `raw` in the known channel.
pub fn invocation(raw: &str, user_id: &str) -> CommandInvocation {
    CommandInvocation::new(raw, user(user_id), channel_id())
}
