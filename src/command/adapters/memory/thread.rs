//! In-memory summary thread starter.

use crate::command::{
    domain::{PostId, UserId},
    ports::{ThreadStartError, ThreadStartResult, ThreadStarter},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// A recorded thread start request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadStartCall {
    /// Thread root the summary was requested for.
    pub thread_root: PostId,
    /// Requesting user.
    pub user_id: UserId,
}

/// Thread starter that allocates sequential summary post ids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThreadStarter {
    state: Arc<RwLock<ThreadStarterState>>,
}

#[derive(Debug, Default)]
struct ThreadStarterState {
    calls: Vec<ThreadStartCall>,
    failure: Option<String>,
}

impl InMemoryThreadStarter {
    /// Creates a starter that always succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a starter whose every call fails with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ThreadStarterState {
                calls: Vec::new(),
                failure: Some(reason.into()),
            })),
        }
    }

    /// Returns every request received so far.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadStartError::Runtime`] when the state lock is poisoned.
    pub fn calls(&self) -> ThreadStartResult<Vec<ThreadStartCall>> {
        let state = self
            .state
            .read()
            .map_err(|err| ThreadStartError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state.calls.clone())
    }
}

#[async_trait]
impl ThreadStarter for InMemoryThreadStarter {
    async fn start(&self, thread_root: &PostId, user_id: &UserId) -> ThreadStartResult<PostId> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ThreadStartError::runtime(std::io::Error::other(err.to_string())))?;
        state.calls.push(ThreadStartCall {
            thread_root: thread_root.clone(),
            user_id: user_id.clone(),
        });
        if let Some(reason) = &state.failure {
            return Err(ThreadStartError::runtime(std::io::Error::other(
                reason.clone(),
            )));
        }
        PostId::new(format!("summary-{}", state.calls.len())).map_err(ThreadStartError::runtime)
    }
}
