//! Default audio backend over a rodio sink.

use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use crate::error::{Error, Result};
use crate::playback::AudioOutput;

/// Audio output driving the system's default device.
///
/// The stream handle must stay alive for the sink to keep its device, so
/// it is owned here alongside the sink.
pub struct RodioOutput {
    _stream: OutputStream,
    sink: Sink,
}

impl RodioOutput {
    /// Open the default output device.
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| Error::Playback(format!("failed to open output device: {e}")))?;
        let sink = Sink::connect_new(stream.mixer());
        sink.pause();
        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

impl AudioOutput for RodioOutput {
    fn load(&mut self, wav_bytes: &[u8]) -> Result<()> {
        let source = Decoder::new(Cursor::new(wav_bytes.to_vec()))
            .map_err(|e| Error::Playback(format!("failed to decode container: {e}")))?;
        // clear() drops whatever was queued and leaves the sink paused
        self.sink.clear();
        self.sink.append(source);
        Ok(())
    }

    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
