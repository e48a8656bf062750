//! Command handler configuration.

use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing text and naming used by the command handler.
///
/// # Examples
///
/// ```
/// use atelier::command::config::CommandConfig;
///
/// let config = CommandConfig::from_json(r#"{"image_filename": "fox.png"}"#)
///     .expect("valid configuration");
/// assert_eq!(config.image_filename, "fox.png");
/// assert_eq!(config.generating_message, "Generating image, please wait.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandConfig {
    /// File name given to uploaded images.
    pub image_filename: String,
    /// Ephemeral reply sent when an image job is dispatched.
    pub generating_message: String,
    /// Ephemeral reply for `/summarize` outside a thread.
    pub channel_summary_message: String,
    /// `minijinja` template for the result post; `prompt` is in scope.
    pub post_message_template: String,
    /// Prefix joined with a post id to build redirect locations.
    pub redirect_prefix: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            image_filename: "generated-image.png".to_owned(),
            generating_message: "Generating image, please wait.".to_owned(),
            channel_summary_message: "Channel summarization not implemented".to_owned(),
            post_message_template: "Image generated by the AI from the text: {{ prompt }}"
                .to_owned(),
            redirect_prefix: "/_redirect/pl/".to_owned(),
        }
    }
}

impl CommandConfig {
    /// Loads and validates a configuration from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and the errors of [`CommandConfig::validate`] otherwise.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyImageFilename`] when no file name is set
    /// and [`ConfigError::InvalidTemplate`] when the post template does not
    /// render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_filename.trim().is_empty() {
            return Err(ConfigError::EmptyImageFilename);
        }
        self.render_post_message("")?;
        Ok(())
    }

    /// Renders the result post text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTemplate`] when rendering fails.
    pub fn render_post_message(&self, prompt: &str) -> Result<String, ConfigError> {
        Environment::new()
            .render_str(&self.post_message_template, context! { prompt => prompt })
            .map_err(|err| ConfigError::InvalidTemplate(err.to_string()))
    }
}

/// Errors for loading or validating [`CommandConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid command configuration: {0}")]
    Parse(String),

    /// The image file name was empty.
    #[error("image filename must not be empty")]
    EmptyImageFilename,

    /// The post template failed to render.
    #[error("invalid post message template: {0}")]
    InvalidTemplate(String),
}
