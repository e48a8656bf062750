//! Command definitions registered with the host at start-up.

use super::Verb;
use serde::{Deserialize, Serialize};

/// A slash command as advertised to the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Trigger word without the leading slash.
    pub trigger: String,
    /// Name shown in the command picker.
    pub display_name: String,
    /// Help text.
    pub description: String,
    /// Whether the host should offer autocompletion.
    pub auto_complete: bool,
    /// Help text shown alongside autocompletion.
    pub auto_complete_description: String,
}

impl CommandDefinition {
    /// Creates a definition with autocompletion enabled and the description
    /// reused as autocomplete help.
    ///
    /// The trigger is kept as given; verbs are matched case-sensitively.
    #[must_use]
    pub fn new(
        trigger: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let help = description.into();
        Self {
            trigger: trigger.into(),
            display_name: display_name.into(),
            auto_complete_description: help.clone(),
            description: help,
            auto_complete: true,
        }
    }

    /// Returns the definition for a recognised verb.
    #[must_use]
    pub fn for_verb(verb: Verb) -> Self {
        match verb {
            Verb::Summarize => Self::new(
                verb.trigger(),
                "Summarize",
                "Summarize current context",
            ),
            Verb::Imagine => Self::new(
                verb.trigger(),
                "Imagine",
                "Generate a new image based on the provided text",
            ),
        }
    }

    /// Returns the built-in definitions in registration order.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        Verb::ALL.into_iter().map(Self::for_verb).collect()
    }
}
