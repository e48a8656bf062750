//! Host wire form of a command outcome.

use super::{ChannelId, CommandOutcome};
use serde::{Deserialize, Serialize};

/// Visibility of a command response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible only to the invoking user.
    Ephemeral,
    /// Posted to the channel for everyone.
    InChannel,
}

/// Command response returned to the host platform.
///
/// Unset fields are omitted when serialized, so a no-op outcome serializes to
/// an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Response visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    /// Message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Location the client should navigate to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goto_location: Option<String>,
    /// Channel the response belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
}

impl CommandResponse {
    /// Converts an outcome into the host response.
    ///
    /// Redirects are rendered as `<redirect_prefix><post_id>`.
    #[must_use]
    pub fn from_outcome(
        outcome: &CommandOutcome,
        channel_id: &ChannelId,
        redirect_prefix: &str,
    ) -> Self {
        match outcome {
            CommandOutcome::Redirect { post_id } => Self {
                goto_location: Some(format!("{redirect_prefix}{post_id}")),
                ..Self::default()
            },
            CommandOutcome::Ephemeral { text } => Self {
                response_type: Some(ResponseType::Ephemeral),
                text: Some(text.clone()),
                channel_id: Some(channel_id.clone()),
                ..Self::default()
            },
            CommandOutcome::NoOp => Self::default(),
        }
    }
}
