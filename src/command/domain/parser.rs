//! Command-line parser.

use serde::{Deserialize, Serialize};

/// A command line split into its verb and the remaining argument text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    verb: String,
    argument: String,
}

impl ParsedCommand {
    /// Splits `raw_text` into a verb and an argument.
    ///
    /// Surrounding whitespace is trimmed and the line is split on its first
    /// whitespace run. The verb is kept verbatim, leading slash included. The
    /// argument is empty when nothing follows the verb, and the verb is empty
    /// only when the trimmed input is empty.
    #[must_use]
    pub fn parse(raw_text: &str) -> Self {
        let trimmed = raw_text.trim();
        let (verb, argument) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(head, tail)| (head, tail.trim_start()));

        Self {
            verb: verb.to_owned(),
            argument: argument.to_owned(),
        }
    }

    /// Returns the first token of the command line.
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Returns everything after the verb, or an empty string.
    #[must_use]
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Returns `true` when the input contained nothing but whitespace.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.verb.is_empty()
    }
}
