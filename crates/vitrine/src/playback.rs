//! Two-state playback over a replaceable audio source.
//!
//! The state machine is deliberately backend-agnostic: everything that
//! touches an actual device sits behind [`AudioOutput`], so the transitions
//! can be tested against a plain fake and multiple independent instances
//! can coexist.

use crate::error::Result;

/// Output backend seam driven by [`Playback`].
pub trait AudioOutput {
    /// Replace the current source with `wav_bytes`, leaving it paused at
    /// the start. Any previously installed source is released first.
    fn load(&mut self, wav_bytes: &[u8]) -> Result<()>;

    /// Begin or resume playback from the current position.
    fn play(&mut self);

    /// Pause without discarding position.
    fn pause(&mut self);

    /// True once the installed source has played to its end.
    fn is_finished(&self) -> bool;
}

/// Playback mode of the current source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No container has been loaded yet
    NoSource,
    /// A container is loaded and not advancing
    Paused,
    /// The loaded container is advancing
    Playing,
}

/// Playback context owning the output backend and the current container.
pub struct Playback<O> {
    output: O,
    source: Option<Vec<u8>>,
    state: PlaybackState,
    on_ended: Option<Box<dyn FnOnce() + Send>>,
}

impl<O: AudioOutput> Playback<O> {
    #[must_use]
    pub fn new(output: O) -> Self {
        Self {
            output,
            source: None,
            state: PlaybackState::NoSource,
            on_ended: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Install a freshly synthesized container, releasing the prior one.
    ///
    /// On success the state is `Paused` regardless of what the replaced
    /// source was doing. On failure the previous container stays current.
    pub fn load(&mut self, wav_bytes: Vec<u8>) -> Result<()> {
        self.output.load(&wav_bytes)?;
        self.source = Some(wav_bytes);
        self.state = PlaybackState::Paused;
        Ok(())
    }

    /// Flip between `Playing` and `Paused`.
    ///
    /// A toggle with no source installed has no effect.
    pub fn toggle(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::NoSource => {}
            PlaybackState::Paused => {
                self.output.play();
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Playing => {
                self.output.pause();
                self.state = PlaybackState::Paused;
            }
        }
        self.state
    }

    /// Arm the completion continuation for the next natural end of playback.
    ///
    /// The continuation is consumed when it fires; arm it again for the
    /// next playback. Arming twice replaces the pending continuation.
    pub fn on_ended(&mut self, callback: impl FnOnce() + Send + 'static) {
        self.on_ended = Some(Box::new(callback));
    }

    /// Observe the output and settle a finished playback.
    ///
    /// When the source has played to its end, the state returns to
    /// `Paused`, the armed continuation fires exactly once, and the stored
    /// container is reinstalled so the position is back at the start.
    pub fn poll(&mut self) -> Result<PlaybackState> {
        if self.state == PlaybackState::Playing && self.output.is_finished() {
            self.state = PlaybackState::Paused;
            if let Some(callback) = self.on_ended.take() {
                callback();
            }
            if let Some(bytes) = &self.source {
                self.output.load(bytes)?;
            }
        }
        Ok(self.state)
    }
}
