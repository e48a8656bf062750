//! Usage restriction port.

use crate::command::domain::{Channel, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authorization checks.
pub type AuthorizationResult<T> = Result<T, AuthorizationError>;

/// Decides whether a user may run commands in a channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Checks the usage policy for `user_id` in `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Denied`] when the policy rejects the
    /// user, or [`AuthorizationError::Runtime`] when the policy cannot be
    /// evaluated.
    async fn check(&self, user_id: &UserId, channel: &Channel) -> AuthorizationResult<()>;
}

/// Errors returned by authorizer adapters.
#[derive(Debug, Clone, Error)]
pub enum AuthorizationError {
    /// The policy rejected the request.
    #[error("usage denied: {0}")]
    Denied(String),

    /// The policy could not be evaluated.
    #[error("usage policy unavailable: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthorizationError {
    /// Creates a denial with a reason.
    pub fn denied(reason: impl Into<String>) -> Self {
        Self::Denied(reason.into())
    }

    /// Wraps a policy engine error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
