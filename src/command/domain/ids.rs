//! Identifier types for the command domain.
//!
//! Platform identifiers are opaque strings minted by the host chat platform.
//! They are validated only for emptiness; everything else about their shape
//! belongs to the host.

use super::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! platform_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns [`IdentifierError::Empty`] when the value is empty
            /// after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
                let raw = value.into();
                if raw.trim().is_empty() {
                    return Err(IdentifierError::Empty { kind: $kind });
                }
                Ok(Self(raw))
            }

            /// Returns the identifier text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

platform_id!(
    /// Identifier of a chat platform user.
    UserId,
    "user"
);

platform_id!(
    /// Identifier of a chat channel.
    ChannelId,
    "channel"
);

platform_id!(
    /// Identifier of a post, including thread roots.
    PostId,
    "post"
);

platform_id!(
    /// Identifier of a file stored by the platform.
    FileId,
    "file"
);

/// Correlation identifier for one background generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    /// Creates a new random job identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
