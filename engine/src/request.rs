use std::fmt;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "dall-e-3";
pub const DEFAULT_SIZE: &str = "1024x1024";
pub const DEFAULT_QUALITY: &str = "standard";
pub const DEFAULT_NUMBER: &str = "1";

/// Generation options exactly as they came off the command line.
///
/// Nothing is checked here, every field may be absent or empty. Turn it into a
/// [`GenerationRequest`] with [`RequestArgs::resolve`].
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RequestArgs {
    /// OpenAI API key. Can also be set with OPENAI_API_KEY environment variable.
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Prompt for image generation.
    #[arg(short, long, required = true, allow_hyphen_values = true)]
    pub prompt: Option<String>,

    /// Model to use for image generation. Default is "dall-e-3".
    #[arg(short, long)]
    pub model: Option<String>,

    /// Size of the image, format WxH (e.g. 1024x1024).
    #[arg(short, long)]
    pub size: Option<String>,

    /// Quality of the image. Allowed: "standard", "hd".
    #[arg(short, long)]
    pub quality: Option<String>,

    /// Number of images to generate.
    #[arg(short, long, allow_hyphen_values = true)]
    pub number: Option<String>,
}

/// A validated request, ready to be sent to an image model.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub api_key: String,
    pub prompt: String,
    pub model: String,
    pub size: String,
    pub quality: String,
    pub count: u32,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("api_key", &"<redacted>")
            .field("prompt", &self.prompt)
            .field("model", &self.model)
            .field("size", &self.size)
            .field("quality", &self.quality)
            .field("count", &self.count)
            .finish()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("The --api-key argument is required if OPENAI_API_KEY is not set.")]
    MissingApiKey,

    #[error("The --prompt argument is required.")]
    MissingPrompt,

    #[error("The --number argument must be a number.")]
    NumberNotNumeric,

    #[error("The --number argument is out of range.")]
    NumberOutOfRange,
}

impl RequestArgs {
    /// Fills in defaults and validates.
    ///
    /// An empty value counts as not given, so `--model ""` means the default
    /// model and `--prompt ""` means no prompt at all. `env_api_key` is the
    /// value of `OPENAI_API_KEY`, if any.
    pub fn resolve(self, env_api_key: Option<String>) -> Result<GenerationRequest, UsageError> {
        let api_key = non_empty(self.api_key)
            .or_else(|| non_empty(env_api_key))
            .ok_or(UsageError::MissingApiKey)?;
        let prompt = non_empty(self.prompt).ok_or(UsageError::MissingPrompt)?;
        let model = non_empty(self.model).unwrap_or_else(|| DEFAULT_MODEL.into());
        let size = non_empty(self.size).unwrap_or_else(|| DEFAULT_SIZE.into());
        let quality = non_empty(self.quality).unwrap_or_else(|| DEFAULT_QUALITY.into());
        let number = non_empty(self.number).unwrap_or_else(|| DEFAULT_NUMBER.into());

        Ok(GenerationRequest {
            api_key,
            prompt,
            model,
            size,
            quality,
            count: parse_count(&number)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_count(number: &str) -> Result<u32, UsageError> {
    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(UsageError::NumberNotNumeric);
    }
    // only digits left, so the parse can only fail on overflow
    number.parse().map_err(|_| UsageError::NumberOutOfRange)
}
