//! Error types for command routing and background generation jobs.

use super::{ChannelId, JobId, JobState, UserId};
use crate::command::ports::{
    AuthorizationError, ChannelLookupError, GeneratorError, PublishError, ThreadStartError,
};
use thiserror::Error;

/// Error returned while constructing platform identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier was empty after trimming.
    #[error("{kind} identifier must not be empty")]
    Empty {
        /// Identifier kind, such as `user` or `channel`.
        kind: &'static str,
    },
}

/// Failures on the synchronous command path.
///
/// Every variant terminates the whole invocation and is surfaced to the host
/// as a failed command response.
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    /// The invocation channel could not be resolved.
    #[error("failed to look up channel {channel_id}: {source}")]
    ChannelLookupFailed {
        /// Channel named by the invocation.
        channel_id: ChannelId,
        /// Underlying lookup failure.
        #[source]
        source: ChannelLookupError,
    },

    /// The usage policy rejected the invoking user in this channel.
    #[error("user {user_id} is not authorized in channel {channel_id}: {source}")]
    Unauthorized {
        /// Invoking user.
        user_id: UserId,
        /// Channel the command was issued in.
        channel_id: ChannelId,
        /// Policy decision or policy failure.
        #[source]
        source: AuthorizationError,
    },

    /// The summary thread could not be started.
    #[error("failed to start summary thread: {0}")]
    ThreadStartFailed(#[from] ThreadStartError),
}

impl CommandError {
    /// Returns the HTTP-style status code reported to the host.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized { .. } => 401,
            Self::ChannelLookupFailed { .. } | Self::ThreadStartFailed(_) => 500,
        }
    }

    /// Returns the stable error identifier reported to the host.
    #[must_use]
    pub const fn error_id(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "app.command.unauthorized",
            Self::ChannelLookupFailed { .. } | Self::ThreadStartFailed(_) => {
                "app.command.execute.error"
            }
        }
    }
}

/// Result type for synchronous command routing.
pub type CommandResult<T> = Result<T, CommandError>;

/// Error returned when a job is moved out of order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum JobStateError {
    /// The target state does not directly follow the current one.
    #[error("job {job_id} cannot move from {} to {}", .from.as_str(), .to.as_str())]
    InvalidTransition {
        /// Job being moved.
        job_id: JobId,
        /// The current state.
        from: JobState,
        /// The attempted target state.
        to: JobState,
    },
}

/// Reason a detached generation job was abandoned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobFailure {
    /// The generator returned an error.
    #[error("unable to generate the new image: {0}")]
    Generation(String),

    /// The generated image could not be encoded as PNG.
    #[error("unable to encode the generated image: {0}")]
    Encoding(String),

    /// The encoded image could not be uploaded.
    #[error("unable to upload the attachment: {0}")]
    Upload(String),

    /// The result message could not be composed or posted.
    #[error("unable to post the new message: {0}")]
    Post(String),

    /// The runner moved the job out of order.
    #[error(transparent)]
    State(#[from] JobStateError),
}

impl JobFailure {
    /// Returns the job state in which the failure occurred.
    #[must_use]
    pub const fn stage(&self) -> JobState {
        match self {
            Self::Generation(_) => JobState::Generating,
            Self::Encoding(_) => JobState::Encoding,
            Self::Upload(_) => JobState::Uploading,
            Self::Post(_) => JobState::Posting,
            Self::State(JobStateError::InvalidTransition { from, .. }) => *from,
        }
    }

    /// Wraps an upload failure.
    #[must_use]
    pub fn upload(err: &PublishError) -> Self {
        Self::Upload(err.to_string())
    }

    /// Wraps a failure to compose or publish the result post.
    #[must_use]
    pub fn post(err: impl std::fmt::Display) -> Self {
        Self::Post(err.to_string())
    }
}

impl From<GeneratorError> for JobFailure {
    fn from(err: GeneratorError) -> Self {
        Self::Generation(err.to_string())
    }
}

impl From<image::ImageError> for JobFailure {
    fn from(err: image::ImageError) -> Self {
        Self::Encoding(err.to_string())
    }
}
