//! Inbound command invocation context.

use super::{ChannelId, ParsedCommand, PostId, UserId};

/// One slash-command invocation as delivered by the host platform.
///
/// Invocations are immutable once built and are consumed by a single routing
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    raw_text: String,
    user_id: UserId,
    channel_id: ChannelId,
    thread_root: Option<PostId>,
}

impl CommandInvocation {
    /// Creates an invocation outside any thread.
    #[must_use]
    pub fn new(raw_text: impl Into<String>, user_id: UserId, channel_id: ChannelId) -> Self {
        Self {
            raw_text: raw_text.into(),
            user_id,
            channel_id,
            thread_root: None,
        }
    }

    /// Sets the thread root the command was issued from.
    #[must_use]
    pub fn with_thread_root(mut self, thread_root: PostId) -> Self {
        self.thread_root = Some(thread_root);
        self
    }

    /// Sets the thread root from a raw host field.
    ///
    /// Hosts send an empty string for commands issued outside a thread; empty
    /// or whitespace-only values clear the thread root.
    #[must_use]
    pub fn with_thread_root_str(mut self, thread_root: &str) -> Self {
        self.thread_root = PostId::new(thread_root).ok();
        self
    }

    /// Returns the raw command line.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Returns the invoking user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the channel the command was issued in.
    #[must_use]
    pub const fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    /// Returns the thread root, if the command was issued inside a thread.
    #[must_use]
    pub const fn thread_root(&self) -> Option<&PostId> {
        self.thread_root.as_ref()
    }

    /// Parses the raw command line.
    #[must_use]
    pub fn parse(&self) -> ParsedCommand {
        ParsedCommand::parse(&self.raw_text)
    }
}
