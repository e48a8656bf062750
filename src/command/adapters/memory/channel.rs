//! In-memory channel directory.

use crate::command::{
    domain::{Channel, ChannelId},
    ports::{ChannelDirectory, ChannelLookupError, ChannelLookupResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Channel directory backed by a fixed map.
#[derive(Debug, Default)]
pub struct InMemoryChannelDirectory {
    channels: HashMap<ChannelId, Channel>,
    lookups: AtomicUsize,
}

impl InMemoryChannelDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a channel, replacing any channel with the same identifier.
    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.insert(channel.id.clone(), channel);
        self
    }

    /// Returns how many lookups have been served.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChannelDirectory for InMemoryChannelDirectory {
    async fn find_channel(&self, channel_id: &ChannelId) -> ChannelLookupResult<Channel> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.channels
            .get(channel_id)
            .cloned()
            .ok_or_else(|| ChannelLookupError::NotFound(channel_id.clone()))
    }
}
