//! Synchronous command outcomes.

use super::PostId;
use serde::{Deserialize, Serialize};

/// What the host should show the invoking user once routing returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// Navigate the user to a newly created or located post.
    Redirect {
        /// Post to navigate to.
        post_id: PostId,
    },
    /// Show a message only the invoking user can see.
    Ephemeral {
        /// Message text.
        text: String,
    },
    /// Nothing to do.
    NoOp,
}

impl CommandOutcome {
    /// Creates an ephemeral outcome.
    #[must_use]
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self::Ephemeral { text: text.into() }
    }

    /// Creates a redirect outcome.
    #[must_use]
    pub const fn redirect(post_id: PostId) -> Self {
        Self::Redirect { post_id }
    }
}
