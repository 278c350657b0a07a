//! Streaming chat with the academic assistant.

use eyre::Result;
use futures::StreamExt;

use academy_core::models::chat::ChatMessage;

use crate::wire::{Content, GenerateContentRequest, GenerateContentResponse, Part, SystemInstruction};
use crate::GeminiClient;

const SYSTEM_INSTRUCTION: &str =
    "You are a helpful and knowledgeable academic assistant for students.";

impl GeminiClient {
    /// Sends the conversation history plus a new message and invokes
    /// `on_chunk` for each text fragment as the model streams it back.
    /// Returns once the remote model signals completion.
    pub async fn stream_chat(
        &self,
        history: &[ChatMessage],
        message: &str,
        mut on_chunk: impl FnMut(&str) + Send,
    ) -> Result<()> {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::text("user", message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(SystemInstruction {
                parts: vec![Part::Text {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            }),
            generation_config: None,
        };

        let url = format!(
            "{}?alt=sse",
            self.endpoint(&self.config().chat_model, "streamGenerateContent")
        );
        let response = self.post(&url, &request).await?;

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            buffer.push_str(&String::from_utf8_lossy(&chunk));
            for event in drain_events(&mut buffer) {
                if let Some(text) = event_text(&event) {
                    on_chunk(&text);
                }
            }
        }
        // A final event without a trailing blank line still counts.
        if let Some(text) = event_text(&buffer) {
            on_chunk(&text);
        }

        Ok(())
    }
}

/// Splits complete server-sent events (terminated by a blank line) off the
/// front of the buffer, leaving any partial event in place.
pub fn drain_events(buffer: &mut String) -> Vec<String> {
    let mut events = Vec::new();
    while let Some(pos) = buffer.find("\n\n") {
        let event: String = buffer.drain(..pos + 2).collect();
        events.push(event);
    }
    events
}

/// Extracts the text payload of one SSE event, if it carries any.
pub fn event_text(event: &str) -> Option<String> {
    let mut text = String::new();
    for line in event.lines() {
        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };
        let data = data.trim();
        if data.is_empty() || data == "[DONE]" {
            continue;
        }
        match serde_json::from_str::<GenerateContentResponse>(data) {
            Ok(response) => text.push_str(&response.text()),
            Err(err) => tracing::warn!("Skipping unparseable stream event: {err}"),
        }
    }
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
