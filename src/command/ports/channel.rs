//! Channel lookup port.

use crate::command::domain::{Channel, ChannelId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for channel lookups.
pub type ChannelLookupResult<T> = Result<T, ChannelLookupError>;

/// Resolves channel identifiers to channel metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// Finds a channel by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelLookupError::NotFound`] when the channel does not
    /// exist.
    async fn find_channel(&self, channel_id: &ChannelId) -> ChannelLookupResult<Channel>;
}

/// Errors returned by channel directory adapters.
#[derive(Debug, Clone, Error)]
pub enum ChannelLookupError {
    /// No channel has the identifier.
    #[error("channel {0} not found")]
    NotFound(ChannelId),

    /// Host platform failure.
    #[error("channel lookup failed: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChannelLookupError {
    /// Wraps a host platform error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
