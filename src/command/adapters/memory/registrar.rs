//! In-memory command registrar.

use crate::command::{
    domain::CommandDefinition,
    ports::{CommandRegistrar, RegistrationError, RegistrationResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Registrar that keeps definitions in registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommandRegistrar {
    definitions: Arc<RwLock<Vec<CommandDefinition>>>,
}

impl InMemoryCommandRegistrar {
    /// Creates an empty registrar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered definitions.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Runtime`] when the lock is poisoned.
    pub fn definitions(&self) -> RegistrationResult<Vec<CommandDefinition>> {
        let definitions = self
            .definitions
            .read()
            .map_err(|err| RegistrationError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(definitions.clone())
    }
}

#[async_trait]
impl CommandRegistrar for InMemoryCommandRegistrar {
    async fn register(&self, definition: &CommandDefinition) -> RegistrationResult<()> {
        let mut definitions = self
            .definitions
            .write()
            .map_err(|err| RegistrationError::runtime(std::io::Error::other(err.to_string())))?;
        if definitions
            .iter()
            .any(|existing| existing.trigger == definition.trigger)
        {
            return Err(RegistrationError::DuplicateTrigger(
                definition.trigger.clone(),
            ));
        }
        definitions.push(definition.clone());
        Ok(())
    }
}
