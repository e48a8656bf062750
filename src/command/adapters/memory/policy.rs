//! In-memory usage policy.

use crate::command::{
    domain::{Channel, ChannelId, UserId},
    ports::{AuthorizationError, AuthorizationResult, Authorizer},
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Usage policy that allows everyone except listed users and channels.
#[derive(Debug, Default)]
pub struct InMemoryUsagePolicy {
    denied_users: HashSet<UserId>,
    denied_channels: HashSet<ChannelId>,
    checks: AtomicUsize,
}

impl InMemoryUsagePolicy {
    /// Creates a policy that allows every request.
    #[must_use]
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Denies every request from `user_id`.
    #[must_use]
    pub fn with_denied_user(mut self, user_id: UserId) -> Self {
        self.denied_users.insert(user_id);
        self
    }

    /// Denies every request in `channel_id`.
    #[must_use]
    pub fn with_denied_channel(mut self, channel_id: ChannelId) -> Self {
        self.denied_channels.insert(channel_id);
        self
    }

    /// Returns how many checks have been evaluated.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authorizer for InMemoryUsagePolicy {
    async fn check(&self, user_id: &UserId, channel: &Channel) -> AuthorizationResult<()> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        if self.denied_users.contains(user_id) {
            return Err(AuthorizationError::denied(format!(
                "user {user_id} may not use AI commands"
            )));
        }
        if self.denied_channels.contains(&channel.id) {
            return Err(AuthorizationError::denied(format!(
                "AI commands are disabled in channel {}",
                channel.name
            )));
        }
        Ok(())
    }
}
