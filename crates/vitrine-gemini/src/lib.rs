//! Google Generative Language integration for Vitrine
//!
//! This crate provides the two generation clients a showcase page needs:
//! marketing copy and spoken audio, both served by Google's Generative
//! Language API.
//!
//! # Features
//!
//! - `GeminiCopywriter`: short-form copy generation with an optional
//!   system instruction
//! - `GeminiSpeech`: text-to-speech returning a decoded
//!   [`vitrine::PcmBuffer`] ready for WAV synthesis
//! - Bounded retry with jittered exponential backoff on every call
//!
//! # Copy Example
//!
//! ```no_run
//! use vitrine_gemini::GeminiCopywriter;
//!
//! # async fn example() -> vitrine::Result<()> {
//! let writer = GeminiCopywriter::new()
//!     .with_api_key("your-api-key")
//!     .with_system_instruction("You are a luxury fragrance concierge.");
//!
//! let copy = writer.generate("Three short pairing suggestions.").await?;
//! println!("{copy}");
//! # Ok(())
//! # }
//! ```
//!
//! # Speech Example
//!
//! ```no_run
//! use vitrine::encode_wav;
//! use vitrine_gemini::GeminiSpeech;
//!
//! # async fn example() -> vitrine::Result<()> {
//! let speech = GeminiSpeech::new().with_api_key("your-api-key");
//! let pcm = speech.synthesize("Stronger. Sweeter. Infinite.").await?;
//! let wav = encode_wav(&pcm);
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! The API requires a key. Set it via environment variable:
//! ```bash
//! export GEMINI_API_KEY="your-api-key"
//! ```
//! Or pass it directly with `with_api_key`.

/// Generative Language API base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub mod copywriter;
pub mod speech;

mod transport;
mod wire;

pub use copywriter::GeminiCopywriter;
pub use speech::GeminiSpeech;
