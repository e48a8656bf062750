//! Recognised command verbs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of verbs this handler acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verb {
    /// Start a summary thread for the current context.
    Summarize,
    /// Generate an image from the argument text.
    Imagine,
}

impl Verb {
    /// Every recognised verb, in registration order.
    pub const ALL: [Self; 2] = [Self::Summarize, Self::Imagine];

    /// Recognises a parsed verb token.
    ///
    /// One leading `/` is optional. Matching is case-sensitive. Returns
    /// `None` for anything else, including the empty token.
    #[must_use]
    pub fn recognize(token: &str) -> Option<Self> {
        let name = token.strip_prefix('/').unwrap_or(token);
        match name {
            "summarize" => Some(Self::Summarize),
            "imagine" => Some(Self::Imagine),
            _ => None,
        }
    }

    /// Returns the command trigger without the leading slash.
    #[must_use]
    pub const fn trigger(self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Imagine => "imagine",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.trigger())
    }
}
