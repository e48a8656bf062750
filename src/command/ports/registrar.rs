//! Command registration port.

use crate::command::domain::CommandDefinition;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for command registration.
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Registers slash commands with the host platform.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// Registers one command definition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the host rejects the definition.
    async fn register(&self, definition: &CommandDefinition) -> RegistrationResult<()>;
}

/// Errors returned by registrar adapters.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Another command already uses the trigger.
    #[error("command trigger '/{0}' is already registered")]
    DuplicateTrigger(String),

    /// Host platform failure.
    #[error("command registration failed: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistrationError {
    /// Wraps a host platform error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
