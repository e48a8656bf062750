//! Outbound chat posts.

use super::{ChannelId, FileId, UserId};
use serde::{Deserialize, Serialize};

/// A post to be created by the publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Channel to post in.
    pub channel_id: ChannelId,
    /// User the post is attributed to.
    pub user_id: UserId,
    /// Message text.
    pub message: String,
    /// Attached files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<FileId>,
}

impl NewPost {
    /// Creates a text-only post.
    #[must_use]
    pub fn new(channel_id: ChannelId, user_id: UserId, message: impl Into<String>) -> Self {
        Self {
            channel_id,
            user_id,
            message: message.into(),
            file_ids: Vec::new(),
        }
    }

    /// Attaches a stored file.
    #[must_use]
    pub fn with_file(mut self, file_id: FileId) -> Self {
        self.file_ids.push(file_id);
        self
    }
}
