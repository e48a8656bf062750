//! Summary thread port.

use crate::command::domain::{PostId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for thread start operations.
pub type ThreadStartResult<T> = Result<T, ThreadStartError>;

/// Creates or locates the summary thread for a thread root.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadStarter: Send + Sync {
    /// Starts a summary thread for `thread_root` on behalf of `user_id`.
    ///
    /// Returns the post the user should be redirected to.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadStartError`] when the thread cannot be created.
    async fn start(&self, thread_root: &PostId, user_id: &UserId) -> ThreadStartResult<PostId>;
}

/// Errors returned by thread starter adapters.
#[derive(Debug, Clone, Error)]
pub enum ThreadStartError {
    /// The thread root does not exist.
    #[error("thread root {0} not found")]
    RootNotFound(PostId),

    /// Summarization backend failure.
    #[error("summary thread creation failed: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ThreadStartError {
    /// Wraps a summarization backend error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
