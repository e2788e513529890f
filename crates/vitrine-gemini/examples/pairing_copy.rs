//! Generate short pairing copy for a product showcase
//!
//! This example demonstrates:
//! - Creating a GeminiCopywriter instance
//! - Steering tone with a system instruction
//! - Bounded retry on transient failures
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
//! cargo run --example pairing_copy
//! ```

use vitrine::retry::RetryPolicy;
use vitrine_gemini::GeminiCopywriter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("GEMINI_API_KEY").is_err() {
        eprintln!("Error: GEMINI_API_KEY environment variable not set");
        std::process::exit(1);
    }

    let writer = GeminiCopywriter::new()
        .with_system_instruction(
            "You are a luxury fashion and fragrance concierge. \
             Your responses must be short, high-end, and authoritative.",
        )
        .with_retry_policy(RetryPolicy::exponential(2));

    println!("Requesting pairing suggestions...\n");
    let copy = writer
        .generate(
            "Generate 3 very short, punchy pairing suggestions for a vanilla-and-musk \
             fragrance. One line per suggestion. No intro.",
        )
        .await?;

    for line in copy.lines().filter(|line| !line.trim().is_empty()) {
        println!("  {}", line.trim());
    }

    Ok(())
}
