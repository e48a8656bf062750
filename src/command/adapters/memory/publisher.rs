//! In-memory publisher.

use crate::command::{
    domain::{ChannelId, FileId, NewPost, PostId},
    ports::{PublishError, PublishResult, Publisher},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// A file accepted by [`InMemoryPublisher::upload_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Identifier assigned to the file.
    pub file_id: FileId,
    /// Channel the file was uploaded to.
    pub channel_id: ChannelId,
    /// File name.
    pub filename: String,
    /// File content.
    pub bytes: Vec<u8>,
}

/// A post accepted by [`InMemoryPublisher::create_post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPost {
    /// Identifier assigned to the post.
    pub post_id: PostId,
    /// Post content.
    pub post: NewPost,
}

/// One publisher call, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublisherCall {
    /// An upload attempt.
    Upload {
        /// Target channel.
        channel_id: ChannelId,
        /// File name.
        filename: String,
    },
    /// A post attempt.
    Post(NewPost),
}

/// Publisher that keeps uploads and posts in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPublisher {
    state: Arc<RwLock<PublisherState>>,
}

#[derive(Debug, Default)]
struct PublisherState {
    calls: Vec<PublisherCall>,
    files: Vec<StoredFile>,
    posts: Vec<StoredPost>,
    upload_failure: Option<String>,
    post_failure: Option<String>,
}

impl InMemoryPublisher {
    /// Creates a publisher that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher that rejects every upload with `reason`.
    #[must_use]
    pub fn rejecting_uploads(reason: impl Into<String>) -> Self {
        Self::with_state(PublisherState {
            upload_failure: Some(reason.into()),
            ..PublisherState::default()
        })
    }

    /// Creates a publisher that rejects every post with `reason`.
    #[must_use]
    pub fn rejecting_posts(reason: impl Into<String>) -> Self {
        Self::with_state(PublisherState {
            post_failure: Some(reason.into()),
            ..PublisherState::default()
        })
    }

    fn with_state(state: PublisherState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns every call received, in order, including rejected ones.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Runtime`] when the state lock is poisoned.
    pub fn calls(&self) -> PublishResult<Vec<PublisherCall>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.calls.clone())
    }

    /// Returns the files stored so far.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Runtime`] when the state lock is poisoned.
    pub fn files(&self) -> PublishResult<Vec<StoredFile>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.files.clone())
    }

    /// Returns the posts created so far.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Runtime`] when the state lock is poisoned.
    pub fn posts(&self) -> PublishResult<Vec<StoredPost>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.posts.clone())
    }
}

#[async_trait]
impl Publisher for InMemoryPublisher {
    async fn upload_file(
        &self,
        bytes: Vec<u8>,
        channel_id: &ChannelId,
        filename: &str,
    ) -> PublishResult<FileId> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.calls.push(PublisherCall::Upload {
            channel_id: channel_id.clone(),
            filename: filename.to_owned(),
        });
        if let Some(reason) = &state.upload_failure {
            return Err(PublishError::rejected(reason.clone()));
        }

        let file_id = FileId::new(format!("file-{}", state.files.len() + 1))
            .map_err(PublishError::runtime)?;
        state.files.push(StoredFile {
            file_id: file_id.clone(),
            channel_id: channel_id.clone(),
            filename: filename.to_owned(),
            bytes,
        });
        Ok(file_id)
    }

    async fn create_post(&self, post: NewPost) -> PublishResult<PostId> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.calls.push(PublisherCall::Post(post.clone()));
        if let Some(reason) = &state.post_failure {
            return Err(PublishError::rejected(reason.clone()));
        }

        let post_id = PostId::new(format!("post-{}", state.posts.len() + 1))
            .map_err(PublishError::runtime)?;
        state.posts.push(StoredPost {
            post_id: post_id.clone(),
            post,
        });
        Ok(post_id)
    }
}

fn poisoned(err: impl std::fmt::Display) -> PublishError {
    PublishError::runtime(std::io::Error::other(err.to_string()))
}
