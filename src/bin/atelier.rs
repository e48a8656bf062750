//! Runs the command handler against in-memory platform adapters.
//!
//! Usage:
//!
//! ```text
//! atelier [config-path]
//! ```
//!
//! Each stdin line is routed as one slash command from a demo user in a demo
//! channel. A leading `thread:<post-id>` token issues the command from inside
//! that thread:
//!
//! ```text
//! /imagine a red fox
//! thread:root-1 /summarize
//! ```
//!
//! The optional JSON file at `config-path` overrides [`CommandConfig`]
//! fields. Responses and job results are reported through `tracing`; set
//! `RUST_LOG` to adjust verbosity. Outstanding image jobs are drained before
//! exit.

use atelier::command::{
    adapters::{
        memory::{
            InMemoryChannelDirectory, InMemoryCommandRegistrar, InMemoryImageGenerator,
            InMemoryPublisher, InMemoryThreadStarter, InMemoryUsagePolicy,
        },
        runtime::TokioJobDispatcher,
    },
    config::{CommandConfig, ConfigError},
    domain::{
        Channel, ChannelId, ChannelKind, CommandInvocation, IdentifierError, UserId,
    },
    ports::RegistrationError,
    services::{CommandRouter, GenerationJobRunner, register_commands},
};
use mockable::DefaultClock;
use std::io::{self, BufRead};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

const DEMO_USER: &str = "demo-user";
const DEMO_CHANNEL: &str = "town-square";
const THREAD_PREFIX: &str = "thread:";

/// Errors that stop the demo host.
#[derive(Debug, Error)]
enum HostError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read configuration {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("failed to read command input: {0}")]
    Input(#[source] io::Error),
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

type DemoDispatcher = TokioJobDispatcher<InMemoryImageGenerator, InMemoryPublisher, DefaultClock>;

type DemoRouter = CommandRouter<
    InMemoryChannelDirectory,
    InMemoryUsagePolicy,
    InMemoryThreadStarter,
    DemoDispatcher,
>;

fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config(std::env::args().skip(1))?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(HostError::RuntimeInit)?;

    let (router, dispatcher) = runtime.block_on(wire(config, runtime.handle().clone()))?;
    let user_id = UserId::new(DEMO_USER)?;
    let channel_id = ChannelId::new(DEMO_CHANNEL)?;

    for entry in io::stdin().lock().lines() {
        let line = entry.map_err(HostError::Input)?;
        let Some(invocation) = invocation_from_line(&line, &user_id, &channel_id) else {
            continue;
        };
        match runtime.block_on(router.respond(&invocation)) {
            Ok(response) => match serde_json::to_string(&response) {
                Ok(body) => tracing::info!(response = %body, "Command handled"),
                Err(err) => tracing::warn!(error = %err, "Response could not be serialized"),
            },
            Err(err) => tracing::warn!(
                status = err.status_code(),
                error_id = err.error_id(),
                error = %err,
                "Command failed"
            ),
        }
    }

    tracing::info!(
        pending = dispatcher.in_flight(),
        "Input closed; waiting for image jobs"
    );
    runtime.block_on(dispatcher.wait_idle());
    Ok(())
}

fn load_config(mut args: impl Iterator<Item = String>) -> Result<CommandConfig, HostError> {
    let Some(path) = args.next() else {
        return Ok(CommandConfig::default());
    };
    if let Some(extra) = args.next() {
        return Err(HostError::InvalidArgs(format!(
            "unexpected argument '{extra}'; usage: atelier [config-path]"
        )));
    }
    let contents = std::fs::read_to_string(&path)
        .map_err(|source| HostError::ConfigRead { path, source })?;
    Ok(CommandConfig::from_json(&contents)?)
}

async fn wire(
    config: CommandConfig,
    handle: tokio::runtime::Handle,
) -> Result<(DemoRouter, Arc<DemoDispatcher>), HostError> {
    let registrar = InMemoryCommandRegistrar::new();
    let registered = register_commands(&registrar).await?;
    tracing::info!(commands = registered.len(), "Registered slash commands");

    let config = Arc::new(config);
    let channels = InMemoryChannelDirectory::new().with_channel(Channel::new(
        ChannelId::new(DEMO_CHANNEL)?,
        "Town Square",
        ChannelKind::Open,
    ));
    let runner = Arc::new(GenerationJobRunner::new(
        Arc::new(InMemoryImageGenerator::new()),
        Arc::new(InMemoryPublisher::new()),
        Arc::new(DefaultClock),
        Arc::clone(&config),
    ));
    let dispatcher = Arc::new(TokioJobDispatcher::new(runner, handle));
    let router = CommandRouter::new(
        Arc::new(channels),
        Arc::new(InMemoryUsagePolicy::allow_all()),
        Arc::new(InMemoryThreadStarter::new()),
        Arc::clone(&dispatcher),
        config,
    );
    Ok((router, dispatcher))
}

/// Splits an optional `thread:<post-id>` token off the front of `line`.
fn split_thread_root(line: &str) -> (Option<&str>, &str) {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix(THREAD_PREFIX) {
        Some(rest) => {
            let (root, command) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            (Some(root), command)
        }
        None => (None, trimmed),
    }
}

fn invocation_from_line(
    line: &str,
    user_id: &UserId,
    channel_id: &ChannelId,
) -> Option<CommandInvocation> {
    let (thread_root, command) = split_thread_root(line);
    if command.trim().is_empty() {
        return None;
    }
    let invocation = CommandInvocation::new(command, user_id.clone(), channel_id.clone());
    Some(match thread_root {
        Some(root) => invocation.with_thread_root_str(root),
        None => invocation,
    })
}
