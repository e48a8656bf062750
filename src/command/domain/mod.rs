//! Domain model for command routing and image generation jobs.
//!
//! Everything here is pure: parsing, verb recognition, outcomes, and the job
//! state machine. Side effects live behind the traits in
//! [`crate::command::ports`].

mod channel;
mod definition;
mod error;
mod ids;
mod invocation;
mod job;
mod outcome;
mod parser;
mod post;
mod response;
mod verb;

pub use channel::{Channel, ChannelKind};
pub use definition::CommandDefinition;
pub use error::{CommandError, CommandResult, IdentifierError, JobFailure, JobStateError};
pub use ids::{ChannelId, FileId, JobId, PostId, UserId};
pub use invocation::CommandInvocation;
pub use job::{
    EncodedImage, GenerationJob, JobProgress, JobReport, JobState, JobTransition, PNG_MIME_TYPE,
};
pub use outcome::CommandOutcome;
pub use parser::ParsedCommand;
pub use post::NewPost;
pub use response::{CommandResponse, ResponseType};
pub use verb::Verb;
