//! Integration tests for the generation clients using a mock HTTP server.
//! These tests don't require an API key and can run without external
//! dependencies.
//!
//! Run with: cargo test -p vitrine-gemini --test gemini_mock_server_tests

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::json;
use vitrine::retry::RetryPolicy;
use vitrine::{encode_wav, Error};
use vitrine_gemini::{GeminiCopywriter, GeminiSpeech};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Retry policy with real backoff shape but negligible delays
fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::exponential(max_attempts)
        .with_backoff_base(Duration::from_millis(1))
        .with_jitter_max(Duration::ZERO)
}

/// Create a copywriter pointed at the mock server
fn copy_client(mock_server_uri: &str) -> GeminiCopywriter {
    GeminiCopywriter::new()
        .with_api_key("test-key")
        .with_api_base(mock_server_uri)
        .with_retry_policy(fast_retry(3))
}

/// Create a speech client pointed at the mock server
fn speech_client(mock_server_uri: &str) -> GeminiSpeech {
    GeminiSpeech::new()
        .with_api_key("test-key")
        .with_api_base(mock_server_uri)
        .with_retry_policy(fast_retry(3))
}

/// Standard text generation response
fn mock_text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }]
            }
        }]
    })
}

/// Audio generation response with the payload under inlineData
fn mock_audio_response(pcm_bytes: &[u8]) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{
                    "inlineData": {
                        "mimeType": "audio/L16;codec=pcm;rate=24000",
                        "data": BASE64.encode(pcm_bytes)
                    }
                }]
            }
        }]
    })
}

// ============= Copy Generation Tests =============

#[tokio::test]
async fn test_mock_copy_generation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/models/gemini-2.5-flash-preview-09-2025:generateContent",
        ))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "Short and bold." }] }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock_text_response("A silk slip dress after dusk.")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let writer = copy_client(&mock_server.uri()).with_system_instruction("Short and bold.");
    let copy = writer.generate("One pairing suggestion.").await.unwrap();
    assert_eq!(copy, "A silk slip dress after dusk.");
}

#[tokio::test]
async fn test_mock_copy_missing_payload_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = copy_client(&mock_server.uri()).generate("prompt").await;
    assert!(matches!(result, Err(Error::MissingPayload(_))));
}

#[tokio::test]
async fn test_mock_copy_unparseable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = copy_client(&mock_server.uri()).generate("prompt").await;
    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}

// ============= Retry Behavior Tests =============

#[tokio::test]
async fn test_mock_second_attempt_succeeds_without_third() {
    let mock_server = MockServer::start().await;

    // first attempt fails, every later one would succeed
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_text_response("recovered")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let copy = copy_client(&mock_server.uri())
        .generate("prompt")
        .await
        .unwrap();
    assert_eq!(copy, "recovered");
}

#[tokio::test]
async fn test_mock_retry_exhaustion_spends_exact_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let result = copy_client(&mock_server.uri()).generate("prompt").await;
    assert!(matches!(result, Err(Error::ResponseStatus(503))));
}

#[tokio::test]
async fn test_mock_client_error_retried_like_server_error() {
    // every non-success status retries identically
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(3)
        .mount(&mock_server)
        .await;

    let result = copy_client(&mock_server.uri()).generate("prompt").await;
    assert!(matches!(result, Err(Error::ResponseStatus(400))));
}

// ============= Speech Synthesis Tests =============

#[tokio::test]
async fn test_mock_speech_payload_decodes_losslessly() {
    let mock_server = MockServer::start().await;
    let pcm_bytes: Vec<u8> = vec![0x01, 0x02, 0xFE, 0xFF, 0x00, 0x80, 0xFF, 0x7F];

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash-preview-tts:generateContent"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseModalities": ["AUDIO"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_audio_response(&pcm_bytes)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pcm = speech_client(&mock_server.uri())
        .synthesize("Stronger. Sweeter. Infinite.")
        .await
        .unwrap();

    assert_eq!(pcm.len(), 4);
    assert_eq!(pcm.sample_rate(), 24_000);

    // wrapping the buffer reproduces the service's bytes, in order
    let wav = encode_wav(&pcm);
    assert_eq!(&wav[44..], pcm_bytes.as_slice());
}

#[tokio::test]
async fn test_mock_speech_falls_back_to_audio_field() {
    let mock_server = MockServer::start().await;
    let pcm_bytes: Vec<u8> = vec![0x0A, 0x00];

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "audio": BASE64.encode(&pcm_bytes) }]
                }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pcm = speech_client(&mock_server.uri())
        .synthesize("text")
        .await
        .unwrap();
    assert_eq!(pcm.samples(), &[10]);
}

#[tokio::test]
async fn test_mock_speech_missing_audio_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock_text_response("no audio here")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = speech_client(&mock_server.uri()).synthesize("text").await;
    assert!(matches!(result, Err(Error::MissingPayload(_))));
}

#[tokio::test]
async fn test_mock_speech_odd_length_payload_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock_audio_response(&[1, 2, 3, 4, 5])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = speech_client(&mock_server.uri()).synthesize("text").await;
    assert!(matches!(result, Err(Error::MalformedSampleData(5))));
}

#[tokio::test]
async fn test_mock_speech_invalid_base64_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inlineData": { "data": "@@not-base64@@" } }]
                }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = speech_client(&mock_server.uri()).synthesize("text").await;
    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}
