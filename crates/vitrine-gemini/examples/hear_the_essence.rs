//! Synthesize speech and play it through the default output device
//!
//! This example demonstrates:
//! - Creating a GeminiSpeech instance
//! - Wrapping the PCM payload into a WAV container
//! - Driving the playback state machine to natural completion
//!
//! # Setup
//!
//! Set your Gemini API key:
//! ```bash
//! export GEMINI_API_KEY=your-api-key-here
//! ```
//!
//! # Run
//!
//! ```bash
//! cargo run --example hear_the_essence
//! ```

use std::time::Duration;

use vitrine::{encode_wav, Playback, PlaybackState, RodioOutput};
use vitrine_gemini::GeminiSpeech;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("GEMINI_API_KEY").is_err() {
        eprintln!("Error: GEMINI_API_KEY environment variable not set");
        std::process::exit(1);
    }

    let speech = GeminiSpeech::new();

    println!("Requesting speech audio...");
    let pcm = speech
        .synthesize("Stronger. Sweeter. Infinite. Experience the depth of bourbon vanilla.")
        .await?;
    println!(
        "Received {} samples ({:.1}s at {} Hz)",
        pcm.len(),
        pcm.duration().as_secs_f32(),
        pcm.sample_rate()
    );

    let mut playback = Playback::new(RodioOutput::new()?);
    playback.load(encode_wav(&pcm))?;
    playback.on_ended(|| println!("Playback finished."));

    playback.toggle();
    while playback.poll()? == PlaybackState::Playing {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    Ok(())
}
