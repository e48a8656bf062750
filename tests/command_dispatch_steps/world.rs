//! World state for command dispatch BDD scenarios.

use std::sync::Arc;

use atelier::command::{
    adapters::{
        memory::{
            InMemoryChannelDirectory, InMemoryCommandRegistrar, InMemoryImageGenerator,
            InMemoryPublisher, InMemoryThreadStarter, InMemoryUsagePolicy,
        },
        runtime::TokioJobDispatcher,
    },
    config::CommandConfig,
    domain::{Channel, ChannelId, ChannelKind, CommandResponse, CommandResult},
    services::{CommandRouter, GenerationJobRunner, register_commands},
};
use eyre::{Result, eyre};
use mockable::DefaultClock;
use rstest::fixture;

pub type TestDispatcher =
    TokioJobDispatcher<InMemoryImageGenerator, InMemoryPublisher, DefaultClock>;

pub type TestRouter = CommandRouter<
    InMemoryChannelDirectory,
    InMemoryUsagePolicy,
    InMemoryThreadStarter,
    TestDispatcher,
>;

pub const CHANNEL: &str = "town-square";

/// In-memory platform wired for one scenario.
pub struct Platform {
    pub router: TestRouter,
    pub dispatcher: Arc<TestDispatcher>,
    pub policy: Arc<InMemoryUsagePolicy>,
    pub publisher: Arc<InMemoryPublisher>,
}

impl Platform {
    /// Wires the platform onto the current tokio runtime and registers the
    /// built-in commands.
    pub fn start(policy: InMemoryUsagePolicy) -> Result<Self> {
        let registrar = InMemoryCommandRegistrar::new();
        run_async(register_commands(&registrar))
            .map_err(|err| eyre!("command registration failed: {err}"))?;

        let config = Arc::new(CommandConfig::default());
        let publisher = Arc::new(InMemoryPublisher::new());
        let policy = Arc::new(policy);
        let channel_id = ChannelId::new(CHANNEL)?;
        let channels = Arc::new(InMemoryChannelDirectory::new().with_channel(Channel::new(
            channel_id,
            "Town Square",
            ChannelKind::Open,
        )));
        let runner = Arc::new(GenerationJobRunner::new(
            Arc::new(InMemoryImageGenerator::new()),
            Arc::clone(&publisher),
            Arc::new(DefaultClock),
            Arc::clone(&config),
        ));
        let dispatcher = Arc::new(TokioJobDispatcher::new(
            runner,
            tokio::runtime::Handle::current(),
        ));
        let router = CommandRouter::new(
            channels,
            Arc::clone(&policy),
            Arc::new(InMemoryThreadStarter::new()),
            Arc::clone(&dispatcher),
            config,
        );

        Ok(Self {
            router,
            dispatcher,
            policy,
            publisher,
        })
    }
}

/// World state for command dispatch BDD tests.
#[derive(Default)]
pub struct DispatchWorld {
    pub platform: Option<Platform>,
    pub reply: Option<CommandResult<CommandResponse>>,
}

impl DispatchWorld {
    pub fn platform(&self) -> Result<&Platform> {
        self.platform
            .as_ref()
            .ok_or_else(|| eyre!("platform not initialised in scenario world"))
    }

    pub fn reply(&self) -> Result<&CommandResult<CommandResponse>> {
        self.reply
            .as_ref()
            .ok_or_else(|| eyre!("no command was sent in this scenario"))
    }
}

#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
