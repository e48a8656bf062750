//! Start-up command registration.

use crate::command::{
    domain::CommandDefinition,
    ports::{CommandRegistrar, RegistrationResult},
};

/// Registers the built-in commands in order, stopping at the first failure.
///
/// Returns the definitions that were registered.
///
/// # Errors
///
/// Returns the registrar's error for the first definition it rejects.
pub async fn register_commands<R>(registrar: &R) -> RegistrationResult<Vec<CommandDefinition>>
where
    R: CommandRegistrar + ?Sized,
{
    let definitions = CommandDefinition::builtin();
    for definition in &definitions {
        registrar.register(definition).await?;
        tracing::debug!(trigger = %definition.trigger, "Registered slash command");
    }
    Ok(definitions)
}
