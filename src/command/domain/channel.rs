//! Channel metadata resolved from the host.

use super::ChannelId;
use serde::{Deserialize, Serialize};

/// Kind of chat channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Public channel.
    Open,
    /// Invite-only channel.
    Private,
    /// One-to-one direct message.
    Direct,
    /// Group direct message.
    Group,
}

/// A channel as seen by the usage policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier.
    pub id: ChannelId,
    /// Display name.
    pub name: String,
    /// Channel kind.
    pub kind: ChannelKind,
}

impl Channel {
    /// Creates channel metadata.
    #[must_use]
    pub fn new(id: ChannelId, name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }
}
