//! Slash-command router.

use crate::command::{
    config::CommandConfig,
    domain::{
        CommandError, CommandInvocation, CommandOutcome, CommandResponse, CommandResult,
        GenerationJob, Verb,
    },
    ports::{Authorizer, ChannelDirectory, JobDispatcher, ThreadStarter},
};
use std::sync::Arc;

/// Routes command invocations to their actions.
///
/// Unrecognised verbs are ignored without touching any collaborator. For
/// recognised verbs the channel is resolved and the usage policy checked
/// before anything else happens. `/summarize` runs synchronously;
/// `/imagine` dispatches a detached job and answers immediately.
#[derive(Clone)]
pub struct CommandRouter<D, A, T, J>
where
    D: ChannelDirectory,
    A: Authorizer,
    T: ThreadStarter,
    J: JobDispatcher,
{
    channels: Arc<D>,
    authorizer: Arc<A>,
    threads: Arc<T>,
    dispatcher: Arc<J>,
    config: Arc<CommandConfig>,
}

impl<D, A, T, J> CommandRouter<D, A, T, J>
where
    D: ChannelDirectory,
    A: Authorizer,
    T: ThreadStarter,
    J: JobDispatcher,
{
    /// Creates a router.
    #[must_use]
    pub const fn new(
        channels: Arc<D>,
        authorizer: Arc<A>,
        threads: Arc<T>,
        dispatcher: Arc<J>,
        config: Arc<CommandConfig>,
    ) -> Self {
        Self {
            channels,
            authorizer,
            threads,
            dispatcher,
            config,
        }
    }

    /// Decides the outcome of `invocation` and triggers its side effect.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ChannelLookupFailed`] or
    /// [`CommandError::Unauthorized`] before any action is taken, and
    /// [`CommandError::ThreadStartFailed`] when a summary thread cannot be
    /// started.
    pub async fn route(&self, invocation: &CommandInvocation) -> CommandResult<CommandOutcome> {
        let parsed = invocation.parse();
        let Some(verb) = Verb::recognize(parsed.verb()) else {
            tracing::debug!(verb = parsed.verb(), "Ignoring unrecognised command");
            return Ok(CommandOutcome::NoOp);
        };

        tracing::info!(
            command = %verb,
            user_id = %invocation.user_id(),
            channel_id = %invocation.channel_id(),
            "Received slash command"
        );
        self.authorize(invocation).await?;

        match verb {
            Verb::Summarize => self.summarize(invocation).await,
            Verb::Imagine => Ok(self.imagine(invocation, parsed.argument())),
        }
    }

    /// Routes `invocation` and converts the outcome into the host response.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`CommandRouter::route`].
    pub async fn respond(&self, invocation: &CommandInvocation) -> CommandResult<CommandResponse> {
        let outcome = self.route(invocation).await?;
        Ok(CommandResponse::from_outcome(
            &outcome,
            invocation.channel_id(),
            &self.config.redirect_prefix,
        ))
    }

    async fn authorize(&self, invocation: &CommandInvocation) -> CommandResult<()> {
        let channel = self
            .channels
            .find_channel(invocation.channel_id())
            .await
            .map_err(|source| CommandError::ChannelLookupFailed {
                channel_id: invocation.channel_id().clone(),
                source,
            })?;

        self.authorizer
            .check(invocation.user_id(), &channel)
            .await
            .map_err(|source| CommandError::Unauthorized {
                user_id: invocation.user_id().clone(),
                channel_id: channel.id.clone(),
                source,
            })
    }

    async fn summarize(&self, invocation: &CommandInvocation) -> CommandResult<CommandOutcome> {
        let Some(thread_root) = invocation.thread_root() else {
            return Ok(CommandOutcome::ephemeral(
                self.config.channel_summary_message.clone(),
            ));
        };

        let post_id = self
            .threads
            .start(thread_root, invocation.user_id())
            .await?;
        Ok(CommandOutcome::redirect(post_id))
    }

    fn imagine(&self, invocation: &CommandInvocation, prompt: &str) -> CommandOutcome {
        let job = GenerationJob::new(
            prompt,
            invocation.channel_id().clone(),
            invocation.user_id().clone(),
        );
        let receipt = self.dispatcher.dispatch(job);
        tracing::info!(job_id = %receipt.job_id, "Dispatched image generation job");
        CommandOutcome::ephemeral(self.config.generating_message.clone())
    }
}
