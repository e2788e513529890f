//! Text-to-speech returning raw PCM samples.
//!
//! The speech models answer `generateContent` like the text models do, but
//! with `responseModalities: ["AUDIO"]` the payload comes back as
//! base64-encoded 16-bit little-endian mono PCM. This module decodes that
//! payload into a [`PcmBuffer`]; wrapping it into a playable container is
//! [`vitrine::encode_wav`]'s job.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use vitrine::audio::{PcmBuffer, DEFAULT_SAMPLE_RATE};
use vitrine::env::{env_string, GEMINI_API_KEY};
use vitrine::retry::RetryPolicy;
use vitrine::{Error, Result};

use crate::transport::post_generate;
use crate::wire::{
    Content, GenerateContentRequest, GenerationConfig, Part, PrebuiltVoiceConfig, SpeechConfig,
    VoiceConfig,
};
use crate::GEMINI_API_BASE;

const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_VOICE: &str = "Rasalgethi";

/// Speech generator backed by a Gemini TTS model.
///
/// # Configuration
///
/// The API key can be set via:
/// - Constructor: `GeminiSpeech::new().with_api_key("...")`
/// - Environment: `GEMINI_API_KEY`
///
/// # Sample Rate
///
/// The service does not tag its PCM payload with a rate; the buffer is
/// tagged with `with_sample_rate`'s value, 24 kHz by default.
pub struct GeminiSpeech {
    /// API key for authentication
    api_key: Option<String>,
    /// Model name
    model: String,
    /// API base URL, overridable for tests
    api_base: String,
    /// Prebuilt voice name
    voice: String,
    /// Sample rate the decoded buffer is tagged with
    sample_rate: u32,
    /// HTTP client
    client: Client,
    /// Retry policy for API calls
    retry_policy: RetryPolicy,
}

impl GeminiSpeech {
    /// Create a speech client with default settings.
    ///
    /// Defaults:
    /// - Model: `gemini-2.5-flash-preview-tts`
    /// - Voice: `Rasalgethi`
    /// - Sample rate: 24000
    /// - API key: from `GEMINI_API_KEY` environment variable
    /// - Retry: exponential backoff, 3 attempts
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: env_string(GEMINI_API_KEY),
            model: DEFAULT_MODEL.to_string(),
            api_base: GEMINI_API_BASE.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE,
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

    /// Set the prebuilt voice name.
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Set the sample rate the decoded buffer is tagged with.
    #[must_use]
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
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

    /// Synthesize speech for `text`, returning the decoded sample buffer.
    ///
    /// Fails with [`Error::MissingPayload`] when the response carries no
    /// audio payload, [`Error::InvalidResponse`] when the payload is not
    /// valid base64, and [`Error::MalformedSampleData`] when the decoded
    /// bytes cannot form whole 16-bit samples.
    pub async fn synthesize(&self, text: &str) -> Result<PcmBuffer> {
        let api_key = self.get_api_key()?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(text)],
            }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: self.voice.clone(),
                        },
                    },
                }),
            }),
        };

        tracing::debug!(model = %self.model, voice = %self.voice, "requesting speech audio");
        let response = post_generate(&self.client, &url, &request, &self.retry_policy).await?;

        let payload = response.first_audio().ok_or_else(|| {
            Error::MissingPayload("candidates[0].content.parts[0].inlineData.data".to_string())
        })?;

        let bytes = BASE64
            .decode(payload)
            .map_err(|e| Error::InvalidResponse(format!("audio payload is not valid base64: {e}")))?;

        PcmBuffer::from_le_bytes(&bytes, self.sample_rate)
    }
}

impl Default for GeminiSpeech {
    fn default() -> Self {
        Self::new()
    }
}
