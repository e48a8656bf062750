//! Result publishing port.

use crate::command::domain::{ChannelId, FileId, NewPost, PostId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for publisher operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Uploads files and creates posts on the host platform.
///
/// Implementations must tolerate concurrent use by independent jobs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Uploads `bytes` to `channel_id` under `filename`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] when the upload is rejected or fails.
    async fn upload_file(
        &self,
        bytes: Vec<u8>,
        channel_id: &ChannelId,
        filename: &str,
    ) -> PublishResult<FileId>;

    /// Creates a post.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] when the post is rejected or fails.
    async fn create_post(&self, post: NewPost) -> PublishResult<PostId>;
}

/// Errors returned by publisher adapters.
#[derive(Debug, Clone, Error)]
pub enum PublishError {
    /// The host rejected the request.
    #[error("rejected by host: {0}")]
    Rejected(String),

    /// Host platform failure.
    #[error("publisher runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl PublishError {
    /// Creates a rejection with a reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Wraps a host platform error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
