//! WAV container synthesis (mono, 16-bit, little-endian).

use crate::audio::pcm::PcmBuffer;

const NUM_CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

/// Wrap a sample buffer into a playable WAV byte stream.
///
/// Layout: 12-byte RIFF descriptor, 24-byte `fmt ` chunk (format code 1,
/// uncompressed PCM), then the `data` chunk with every sample written as a
/// signed 16-bit little-endian integer in input order. The declared sizes
/// always match the trailing data length; an empty buffer yields a valid
/// header-only container.
#[must_use]
pub fn encode_wav(pcm: &PcmBuffer) -> Vec<u8> {
    let sample_rate = pcm.sample_rate();
    let byte_rate = sample_rate * u32::from(NUM_CHANNELS) * u32::from(BITS_PER_SAMPLE) / 8;
    let block_align = NUM_CHANNELS * BITS_PER_SAMPLE / 8;
    let data_size = (pcm.len() * 2) as u32;
    let riff_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + pcm.len() * 2);

    // RIFF descriptor
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&riff_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // uncompressed PCM
    buf.extend_from_slice(&NUM_CHANNELS.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in pcm.samples() {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    buf
}
