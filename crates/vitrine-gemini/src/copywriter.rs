//! Marketing copy generation.
//!
//! # Example
//!
//! ```rust,no_run
//! use vitrine_gemini::GeminiCopywriter;
//!
//! # async fn example() -> vitrine::Result<()> {
//! let writer = GeminiCopywriter::new()
//!     .with_api_key(std::env::var("GEMINI_API_KEY").unwrap_or_default())
//!     .with_system_instruction("Short, high-end, authoritative.");
//!
//! let copy = writer.generate("Three pairing suggestions, one line each.").await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Client;
use vitrine::env::{env_string, GEMINI_API_KEY};
use vitrine::retry::RetryPolicy;
use vitrine::{Error, Result};

use crate::transport::post_generate;
use crate::wire::{Content, GenerateContentRequest, Part};
use crate::GEMINI_API_BASE;

const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Copy generator backed by a Gemini text model.
///
/// # Configuration
///
/// The API key can be set via:
/// - Constructor: `GeminiCopywriter::new().with_api_key("...")`
/// - Environment: `GEMINI_API_KEY`
pub struct GeminiCopywriter {
    /// API key for authentication
    api_key: Option<String>,
    /// Model name
    model: String,
    /// API base URL, overridable for tests
    api_base: String,
    /// Optional system instruction sent with every request
    system_instruction: Option<String>,
    /// HTTP client
    client: Client,
    /// Retry policy for API calls
    retry_policy: RetryPolicy,
}

impl GeminiCopywriter {
    /// Create a copywriter with default settings.
    ///
    /// Defaults:
    /// - Model: `gemini-2.5-flash-preview-09-2025`
    /// - API key: from `GEMINI_API_KEY` environment variable
    /// - Retry: exponential backoff, 3 attempts
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: env_string(GEMINI_API_KEY),
            model: DEFAULT_MODEL.to_string(),
            api_base: GEMINI_API_BASE.to_string(),
            system_instruction: None,
            client: Client::new(),
            retry_policy: RetryPolicy::exponential(3),
        }
    }

    /// Set the API key explicitly.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (mock servers, regional endpoints).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the system instruction sent with every request.
    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Set the retry policy for API calls.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Get the API key, returning an error if not configured.
    fn get_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Configuration(
                "GEMINI_API_KEY not set. Set it via environment variable or with_api_key()"
                    .to_string(),
            )
        })
    }

    /// Generate copy for `prompt`, returning the first candidate's text.
    ///
    /// Fails with [`Error::MissingPayload`] when the response carries no
    /// text part.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.get_api_key()?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            system_instruction: self.system_instruction.as_ref().map(|text| Content {
                parts: vec![Part::text(text)],
            }),
            generation_config: None,
        };

        tracing::debug!(model = %self.model, "requesting copy");
        let response = post_generate(&self.client, &url, &request, &self.retry_policy).await?;

        response
            .first_text()
            .map(str::to_owned)
            .ok_or_else(|| Error::MissingPayload("candidates[0].content.parts[0].text".to_string()))
    }
}

impl Default for GeminiCopywriter {
    fn default() -> Self {
        Self::new()
    }
}
