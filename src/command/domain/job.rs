//! Background image generation jobs.

use super::{ChannelId, JobFailure, JobId, JobStateError, PostId, UserId};
use chrono::{DateTime, Utc};
use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, ImageError, ImageFormat};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// MIME type of every artifact a job uploads.
pub const PNG_MIME_TYPE: &str = "image/png";

/// One unit of detached image generation work.
///
/// The job owns copies of everything it needs, so the invocation that created
/// it can be dropped as soon as the job is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationJob {
    id: JobId,
    prompt: String,
    channel_id: ChannelId,
    user_id: UserId,
}

impl GenerationJob {
    /// Creates a job with a fresh identifier.
    ///
    /// The prompt is kept verbatim, including when it is empty.
    #[must_use]
    pub fn new(prompt: impl Into<String>, channel_id: ChannelId, user_id: UserId) -> Self {
        Self {
            id: JobId::new(),
            prompt: prompt.into(),
            channel_id,
            user_id,
        }
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the prompt text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the channel the result is posted to.
    #[must_use]
    pub const fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    /// Returns the user the result post is attributed to.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Lifecycle state of a generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// Created but not started.
    Pending,
    /// Waiting on the generator.
    Generating,
    /// Encoding the generated image.
    Encoding,
    /// Uploading the encoded image.
    Uploading,
    /// Publishing the result post.
    Posting,
    /// Result post published.
    Done,
    /// Abandoned after a failure.
    Failed,
}

impl JobState {
    /// Returns the canonical name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Generating => "generating",
            Self::Encoding => "encoding",
            Self::Uploading => "uploading",
            Self::Posting => "posting",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Returns `true` for `Done` and `Failed`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Returns `true` when `next` directly follows this state.
    ///
    /// Steps only move forward one at a time, and any non-terminal state may
    /// fail.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Generating)
                | (Self::Generating, Self::Encoding)
                | (Self::Encoding, Self::Uploading)
                | (Self::Uploading, Self::Posting)
                | (Self::Posting, Self::Done)
                | (
                    Self::Pending
                        | Self::Generating
                        | Self::Encoding
                        | Self::Uploading
                        | Self::Posting,
                    Self::Failed
                )
        )
    }
}

/// A state entered by a job, with the time it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTransition {
    /// State entered.
    pub state: JobState,
    /// Entry time.
    pub at: DateTime<Utc>,
}

/// Tracks the state of one running job.
///
/// Every move is checked against [`JobState::can_transition_to`]; a rejected
/// move leaves the history untouched.
#[derive(Debug, Clone)]
pub struct JobProgress {
    job_id: JobId,
    history: Vec<JobTransition>,
    post_id: Option<PostId>,
    failure: Option<JobFailure>,
}

impl JobProgress {
    /// Starts tracking a job in the `Pending` state.
    #[must_use]
    pub fn start(job_id: JobId, clock: &impl Clock) -> Self {
        Self {
            job_id,
            history: vec![JobTransition {
                state: JobState::Pending,
                at: clock.utc(),
            }],
            post_id: None,
            failure: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> JobState {
        self.history
            .last()
            .map_or(JobState::Pending, |transition| transition.state)
    }

    /// Moves the job into `next`.
    ///
    /// # Errors
    ///
    /// Returns [`JobStateError::InvalidTransition`] when `next` does not
    /// directly follow the current state.
    pub fn advance(&mut self, next: JobState, clock: &impl Clock) -> Result<(), JobStateError> {
        let current = self.state();
        if !current.can_transition_to(next) {
            return Err(JobStateError::InvalidTransition {
                job_id: self.job_id,
                from: current,
                to: next,
            });
        }
        self.history.push(JobTransition {
            state: next,
            at: clock.utc(),
        });
        Ok(())
    }

    /// Marks the job done with its published post.
    ///
    /// # Errors
    ///
    /// Returns [`JobStateError::InvalidTransition`] unless the job is
    /// `Posting`.
    pub fn complete(&mut self, post_id: PostId, clock: &impl Clock) -> Result<(), JobStateError> {
        self.advance(JobState::Done, clock)?;
        self.post_id = Some(post_id);
        Ok(())
    }

    /// Marks the job failed.
    ///
    /// # Errors
    ///
    /// Returns [`JobStateError::InvalidTransition`] when the job already
    /// finished.
    pub fn fail(&mut self, failure: JobFailure, clock: &impl Clock) -> Result<(), JobStateError> {
        self.advance(JobState::Failed, clock)?;
        self.failure = Some(failure);
        Ok(())
    }

    /// Returns the record of the job so far.
    #[must_use]
    pub fn into_report(self) -> JobReport {
        JobReport {
            job_id: self.job_id,
            history: self.history,
            post_id: self.post_id,
            failure: self.failure,
        }
    }
}

/// Final record of a finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    job_id: JobId,
    history: Vec<JobTransition>,
    post_id: Option<PostId>,
    failure: Option<JobFailure>,
}

impl JobReport {
    /// Returns the job identifier.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the last state entered.
    #[must_use]
    pub fn state(&self) -> JobState {
        self.history
            .last()
            .map_or(JobState::Pending, |transition| transition.state)
    }

    /// Returns every state entered, in order.
    #[must_use]
    pub fn history(&self) -> &[JobTransition] {
        &self.history
    }

    /// Returns the states entered, in order, without timestamps.
    #[must_use]
    pub fn states(&self) -> Vec<JobState> {
        self.history
            .iter()
            .map(|transition| transition.state)
            .collect()
    }

    /// Returns the published result post.
    #[must_use]
    pub const fn post_id(&self) -> Option<&PostId> {
        self.post_id.as_ref()
    }

    /// Returns why the job was abandoned.
    #[must_use]
    pub const fn failure(&self) -> Option<&JobFailure> {
        self.failure.as_ref()
    }
}

/// An encoded artifact ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    mime_type: &'static str,
}

impl EncodedImage {
    /// Encodes a generated image as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError`] when the image has no pixels or the
    /// encoder fails.
    pub fn png(image: &DynamicImage) -> Result<Self, ImageError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )));
        }
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(Self {
            bytes: buffer.into_inner(),
            mime_type: PNG_MIME_TYPE,
        })
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the MIME type of the encoding.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Consumes the artifact and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
