//! Subtitle generation integration tests against a mock Gemini server
//!
//! The live test requires a valid API_KEY and an audio sample.
//! Run with: SRT_SCRIBE_SAMPLE=clip.mp3 cargo test --test generation_tests -- --ignored

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use srt_scribe::application::{generate_srt, GenerateError, GenerateSubtitlesUseCase};
use srt_scribe::application::ports::ModelError;
use srt_scribe::domain::config::GeneratorConfig;
use srt_scribe::infrastructure::{FileAudioSource, GeminiModel};

const MODEL_PATH: &str = "/gemini-2.5-pro:generateContent";

fn audio_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".mp3").tempfile().unwrap();
    file.write_all(&[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x01, 0x02, 0x03]).unwrap();
    file
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn model_for(server: &MockServer) -> GeminiModel {
    GeminiModel::new("test-key").with_base_url(server.uri())
}

fn is_timestamp_line(line: &str) -> bool {
    let Some((start, end)) = line.split_once(" --> ") else {
        return false;
    };
    let is_stamp = |s: &str| {
        s.len() == 12
            && s.char_indices().all(|(i, c)| match i {
                2 | 5 => c == ':',
                8 => c == ',',
                _ => c.is_ascii_digit(),
            })
    };
    is_stamp(start) && is_stamp(end)
}

#[tokio::test]
async fn successful_response_is_trimmed_srt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(
            "\n1\n00:00:00,000 --> 00:00:04,100\nThis is a short test clip\n\n2\n00:00:04,100 --> 00:00:09,800\nThanks for listening\n\n",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let file = audio_file();
    let source = FileAudioSource::from_path(file.path()).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(model_for(&server));

    let srt = use_case.execute(&source, "English").await.unwrap();

    assert!(!srt.is_empty());
    assert!(srt.starts_with("1\n"));
    assert!(!srt.ends_with('\n'));
    assert!(!srt.contains("```"));
    assert!(srt.lines().any(is_timestamp_line));
}

#[tokio::test]
async fn request_carries_prompt_system_instruction_and_audio() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("1\n00:00:00,000 --> 00:00:01,000\nBonjour")))
        .expect(1)
        .mount(&server)
        .await;

    let file = audio_file();
    let source = FileAudioSource::from_path(file.path()).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(model_for(&server));

    use_case.execute(&source, "French").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let instruction = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(instruction.contains("Write the subtitles in French."));
    let inline = &body["contents"][0]["parts"][1]["inlineData"];
    assert_eq!(inline["mimeType"], "audio/mpeg");
    assert_eq!(inline["data"], "//uQZAABAgM=");
    let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
    assert!(system.contains("ONLY the raw SRT"));
}

#[tokio::test]
async fn quota_failure_renders_exact_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED" }
        })))
        .mount(&server)
        .await;

    let file = audio_file();
    let source = FileAudioSource::from_path(file.path()).unwrap();
    let config = GeneratorConfig::new(Some("test-key".to_string()));
    let uri = server.uri();

    let text = generate_srt(
        &config,
        |key, model| GeminiModel::with_model(key, model).with_base_url(uri),
        &source,
        "French",
    )
    .await
    .unwrap();

    assert_eq!(text, "An error occurred: quota exceeded");
}

#[tokio::test]
async fn rate_limit_without_body_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let file = audio_file();
    let source = FileAudioSource::from_path(file.path()).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(model_for(&server));

    let err = use_case.execute(&source, "English").await.unwrap_err();
    assert!(matches!(err, GenerateError::Model(ModelError::RateLimited)));
}

#[tokio::test]
async fn unauthorized_is_invalid_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let file = audio_file();
    let source = FileAudioSource::from_path(file.path()).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(model_for(&server));

    let err = use_case.execute(&source, "English").await.unwrap_err();
    assert!(matches!(err, GenerateError::Model(ModelError::InvalidApiKey)));
    assert_eq!(err.render(), "An error occurred: Invalid API key");
}

#[tokio::test]
async fn response_without_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "OTHER" }
        })))
        .mount(&server)
        .await;

    let file = audio_file();
    let source = FileAudioSource::from_path(file.path()).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(model_for(&server));

    let text = use_case.execute_to_text(&source, "English").await;
    assert!(text.starts_with("An error occurred:"));
}

#[tokio::test]
async fn error_without_message_renders_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "status": "INTERNAL" }
        })))
        .mount(&server)
        .await;

    let file = audio_file();
    let source = FileAudioSource::from_path(file.path()).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(model_for(&server));

    let text = use_case.execute_to_text(&source, "English").await;
    assert_eq!(text, srt_scribe::application::UNKNOWN_ERROR_MESSAGE);
}

#[tokio::test]
async fn unreachable_server_is_request_failure() {
    // Nothing listens on the discard port
    let model = GeminiModel::new("test-key").with_base_url("http://127.0.0.1:9");
    let file = audio_file();
    let source = FileAudioSource::from_path(file.path()).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(model);

    let err = use_case.execute(&source, "English").await.unwrap_err();
    assert!(matches!(err, GenerateError::Model(ModelError::RequestFailed(_))));
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn concurrent_calls_do_not_interfere() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("1\n00:00:00,000 --> 00:00:02,000\nHi")))
        .expect(2)
        .mount(&server)
        .await;

    let first = audio_file();
    let second = audio_file();
    let a = FileAudioSource::from_path(first.path()).unwrap();
    let b = FileAudioSource::from_path(second.path()).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(model_for(&server));

    let (ra, rb) = tokio::join!(use_case.execute(&a, "English"), use_case.execute(&b, "German"));

    assert_eq!(ra.unwrap(), "1\n00:00:00,000 --> 00:00:02,000\nHi");
    assert_eq!(rb.unwrap(), "1\n00:00:00,000 --> 00:00:02,000\nHi");
}

#[tokio::test]
#[ignore = "requires API_KEY and SRT_SCRIBE_SAMPLE environment variables"]
async fn live_english_clip_has_timestamps() {
    let (Ok(api_key), Ok(sample)) = (std::env::var("API_KEY"), std::env::var("SRT_SCRIBE_SAMPLE"))
    else {
        eprintln!("Skipping test: API_KEY or SRT_SCRIBE_SAMPLE not set");
        return;
    };

    let source = FileAudioSource::from_path(sample).unwrap();
    let use_case = GenerateSubtitlesUseCase::new(GeminiModel::new(api_key));

    let srt = use_case.execute(&source, "English").await.unwrap();

    assert!(!srt.is_empty());
    assert!(!srt.contains("```"));
    assert!(srt.lines().any(is_timestamp_line));
}
