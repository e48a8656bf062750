//! In-memory image generator.

use crate::command::ports::{GeneratorError, GeneratorResult, ImageGenerator};
use async_trait::async_trait;
use image::{DynamicImage, Rgb, RgbImage};
use std::sync::{Arc, RwLock};

const DEFAULT_SIZE: u32 = 64;
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Generator that paints a solid square whose colour is derived from the
/// prompt.
///
/// Blank prompts are rejected. A fixed image or a forced failure can be
/// configured for tests.
#[derive(Debug, Clone)]
pub struct InMemoryImageGenerator {
    size: u32,
    state: Arc<RwLock<GeneratorState>>,
}

#[derive(Debug, Default)]
struct GeneratorState {
    prompts: Vec<String>,
    fixed_image: Option<DynamicImage>,
    failure: Option<String>,
}

impl InMemoryImageGenerator {
    /// Creates a generator producing 64x64 images.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }

    /// Creates a generator producing `size`x`size` images.
    #[must_use]
    pub fn with_size(size: u32) -> Self {
        Self {
            size: size.max(1),
            state: Arc::new(RwLock::new(GeneratorState::default())),
        }
    }

    /// Creates a generator whose every call fails with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            size: DEFAULT_SIZE,
            state: Arc::new(RwLock::new(GeneratorState {
                failure: Some(reason.into()),
                ..GeneratorState::default()
            })),
        }
    }

    /// Creates a generator that returns `image` for every valid prompt.
    #[must_use]
    pub fn returning(image: DynamicImage) -> Self {
        Self {
            size: image.width(),
            state: Arc::new(RwLock::new(GeneratorState {
                fixed_image: Some(image),
                ..GeneratorState::default()
            })),
        }
    }

    /// Returns every prompt received so far, including rejected ones.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Runtime`] when the state lock is poisoned.
    pub fn prompts(&self) -> GeneratorResult<Vec<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| GeneratorError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state.prompts.clone())
    }
}

impl Default for InMemoryImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for InMemoryImageGenerator {
    async fn generate(&self, prompt: &str) -> GeneratorResult<DynamicImage> {
        let mut state = self
            .state
            .write()
            .map_err(|err| GeneratorError::runtime(std::io::Error::other(err.to_string())))?;
        state.prompts.push(prompt.to_owned());

        if let Some(reason) = &state.failure {
            return Err(GeneratorError::runtime(std::io::Error::other(
                reason.clone(),
            )));
        }
        if prompt.trim().is_empty() {
            return Err(GeneratorError::InvalidPrompt(
                "prompt must not be empty".to_owned(),
            ));
        }
        if let Some(image) = &state.fixed_image {
            return Ok(image.clone());
        }

        let canvas = RgbImage::from_pixel(self.size, self.size, prompt_colour(prompt));
        Ok(DynamicImage::ImageRgb8(canvas))
    }
}

fn prompt_colour(prompt: &str) -> Rgb<u8> {
    let hash = prompt.bytes().fold(FNV_OFFSET_BASIS, |acc, byte| {
        (acc ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    });
    let channel = |shift: u32| u8::try_from((hash >> shift) & 0xff).unwrap_or(u8::MAX);
    Rgb([channel(16), channel(8), channel(0)])
}
