//! Client-side core for AI-assisted product showcases.
//!
//! This crate carries the pieces a showcase page's presentation layer
//! composes but does not own: a retry combinator for calls to a remote
//! generation service, a PCM sample buffer with WAV container synthesis,
//! and a two-state playback component over a replaceable audio source.
//!
//! # Features
//!
//! - `retry`: bounded exponential backoff with jitter, gated on
//!   [`Error::is_retryable`]
//! - `audio`: 16-bit mono PCM buffers and lossless WAV encoding
//! - `playback`: `NoSource -> Paused <-> Playing` state machine with a
//!   single-shot completion continuation
//! - `output` (cargo feature `playback`, on by default): a rodio-backed
//!   [`AudioOutput`] driving the system's default device
//!
//! # Example
//!
//! ```no_run
//! use vitrine::{encode_wav, PcmBuffer, Playback, RodioOutput, DEFAULT_SAMPLE_RATE};
//!
//! # fn example(pcm_bytes: &[u8]) -> vitrine::Result<()> {
//! let pcm = PcmBuffer::from_le_bytes(pcm_bytes, DEFAULT_SAMPLE_RATE)?;
//! let wav = encode_wav(&pcm);
//!
//! let mut playback = Playback::new(RodioOutput::new()?);
//! playback.load(wav)?;
//! playback.toggle(); // Paused -> Playing
//! # Ok(())
//! # }
//! ```
//!
//! # See Also
//!
//! - `vitrine-gemini` - Generative Language API clients built on this core

pub mod audio;
pub mod env;
pub mod error;
#[cfg(feature = "playback")]
pub mod output;
pub mod playback;
pub mod retry;

pub use audio::{encode_wav, PcmBuffer, DEFAULT_SAMPLE_RATE};
pub use error::{Error, Result};
#[cfg(feature = "playback")]
pub use output::RodioOutput;
pub use playback::{AudioOutput, Playback, PlaybackState};
pub use retry::{with_retry, RetryPolicy};
