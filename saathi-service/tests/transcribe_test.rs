mod common;

use common::{error_message, file_part, TestApp};
use reqwest::multipart::Form;
use saathi_service::prompts::TRANSCRIPTION_PROMPT;
use saathi_service::services::providers::mock::MockTextProvider;
use saathi_service::services::providers::{Part, ProviderError};

#[tokio::test]
async fn transcribes_audio_with_container_mime_type() {
    let app = TestApp::spawn_with(MockTextProvider::replying(
        "Speaker 1: My Lords, the matter is listed for final hearing.\n",
    ))
    .await;

    let form = Form::new().part("audio", file_part("hearing.m4a", vec![0, 0, 0, 0x20]));
    let response = app.post_form("/api/transcribe-audio", form).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["text"],
        "Speaker 1: My Lords, the matter is listed for final hearing."
    );
    assert_eq!(body["fileName"], "hearing.m4a");
    assert_eq!(body["fileSize"], 4);
    assert!(body["duration"].is_null());
    assert_eq!(body["success"], true);

    let sent = app.provider.requests();
    assert_eq!(
        sent[0].parts,
        vec![
            Part::inline("audio/mp4", vec![0, 0, 0, 0x20]),
            Part::text(TRANSCRIPTION_PROMPT)
        ]
    );
}

#[tokio::test]
async fn rejects_unsupported_and_oversized_audio() {
    let app = TestApp::spawn().await;

    let form = Form::new().part("audio", file_part("memo.flac", vec![1]));
    let response = app.post_form("/api/transcribe-audio", form).await;
    assert_eq!(
        error_message(response, 400).await,
        "Unsupported audio format. Please use MP3, WAV, WEBM, OGG, or M4A."
    );

    let form = Form::new().part("audio", file_part("long.mp3", vec![0; 25 * 1024 * 1024 + 1]));
    let response = app.post_form("/api/transcribe-audio", form).await;
    assert_eq!(
        error_message(response, 400).await,
        "Audio file too large. Maximum size is 25MB."
    );

    let response = app.post_form("/api/transcribe-audio", Form::new()).await;
    assert_eq!(error_message(response, 400).await, "No audio file provided");

    assert_eq!(app.provider.request_count(), 0);
}

#[tokio::test]
async fn silent_audio_is_reported() {
    let app = TestApp::spawn_with(MockTextProvider::replying("   ")).await;

    let form = Form::new().part("audio", file_part("silence.wav", vec![0; 16]));
    let response = app.post_form("/api/transcribe-audio", form).await;

    assert_eq!(
        error_message(response, 400).await,
        "Could not transcribe the audio. Please ensure the audio has clear speech."
    );
}

#[tokio::test]
async fn transcription_failures_use_transcription_context() {
    let app = TestApp::spawn_with(MockTextProvider::failing(|| {
        ProviderError::NetworkError("timed out".into())
    }))
    .await;

    let form = Form::new().part("audio", file_part("a.ogg", vec![1, 2]));
    let response = app.post_form("/api/transcribe-audio", form).await;

    assert_eq!(
        error_message(response, 500).await,
        "Transcription failed: Network error: timed out"
    );
}
