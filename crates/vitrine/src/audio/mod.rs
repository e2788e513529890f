//! PCM sample handling and WAV container synthesis.

pub mod pcm;
pub mod wav;

pub use pcm::{PcmBuffer, DEFAULT_SAMPLE_RATE};
pub use wav::encode_wav;
