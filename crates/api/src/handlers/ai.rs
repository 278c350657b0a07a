use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use academy_ai::speech::SAMPLE_RATE;
use academy_ai::GeminiClient;
use academy_core::errors::AcademyError;
use academy_core::models::chat::ChatMessage;

use crate::middleware::error_handling::AppError;
use crate::ApiState;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageAnalysisRequest {
    /// Base64 payload, optionally still carrying its data-URL header.
    pub image: String,
    pub mime_type: String,
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageAnalysisResponse {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
}

fn ai_client(state: &ApiState) -> Result<Arc<GeminiClient>, Response> {
    state.ai.clone().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "AI tools are not configured" })),
        )
            .into_response()
    })
}

/// Streams the assistant's reply as plain-text fragments. The client
/// concatenates fragments into the growing response; the stream ends when
/// the model signals completion.
#[axum::debug_handler]
pub async fn chat(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ChatRequest>,
) -> Response {
    let client = match ai_client(&state) {
        Ok(client) => client,
        Err(response) => return response,
    };

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    tokio::spawn(async move {
        let outcome = client
            .stream_chat(&payload.history, &payload.message, |chunk| {
                let _ = tx.send(chunk.to_string());
            })
            .await;
        if let Err(err) = outcome {
            tracing::error!("Chat stream failed: {err:#}");
        }
    });

    let stream = futures::stream::unfold(rx, |mut rx| async move {
        rx.recv()
            .await
            .map(|chunk| (Ok::<String, std::convert::Infallible>(chunk), rx))
    });

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(stream),
    )
        .into_response()
}

/// One-shot image analysis: whole response at once, not streamed.
#[axum::debug_handler]
pub async fn analyze_image(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ImageAnalysisRequest>,
) -> Response {
    let client = match ai_client(&state) {
        Ok(client) => client,
        Err(response) => return response,
    };

    match client
        .analyze_image(&payload.image, &payload.mime_type, payload.prompt.as_deref())
        .await
    {
        Ok(text) => Json(ImageAnalysisResponse { text }).into_response(),
        Err(err) => AppError(AcademyError::Backend(err)).into_response(),
    }
}

/// Synthesizes speech and returns raw 16-bit mono PCM at 24 kHz. Decoding
/// into a playable buffer and playback control stay with the caller.
#[axum::debug_handler]
pub async fn synthesize_speech(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SpeechRequest>,
) -> Response {
    let client = match ai_client(&state) {
        Ok(client) => client,
        Err(response) => return response,
    };

    match client.synthesize_speech(&payload.text).await {
        Ok(samples) => {
            let mut bytes = Vec::with_capacity(samples.len() * 2);
            for sample in samples {
                bytes.extend_from_slice(&sample.to_le_bytes());
            }
            (
                [(
                    header::CONTENT_TYPE,
                    format!("audio/L16; rate={SAMPLE_RATE}; channels=1"),
                )],
                bytes,
            )
                .into_response()
        }
        Err(err) => AppError(AcademyError::Backend(err)).into_response(),
    }
}
