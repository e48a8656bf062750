//! Image generation port.

use async_trait::async_trait;
use image::DynamicImage;
use std::sync::Arc;
use thiserror::Error;

/// Result type for image generation.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generates an image from a text prompt.
///
/// Timeouts and retries, if any, belong to implementations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates an image for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidPrompt`] when the prompt is rejected,
    /// or [`GeneratorError::Runtime`] when the backend fails.
    async fn generate(&self, prompt: &str) -> GeneratorResult<DynamicImage>;
}

/// Errors returned by image generator adapters.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    /// The prompt was rejected.
    #[error("invalid prompt: {0}")]
    InvalidPrompt(String),

    /// Generation backend failure.
    #[error("image generation failed: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl GeneratorError {
    /// Wraps a generation backend error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
