//! Single-image analysis.

use eyre::Result;

use crate::wire::{Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part};
use crate::GeminiClient;

const DEFAULT_PROMPT: &str = "Analyze this image in detail.";

impl GeminiClient {
    /// Sends one image (base64, possibly still carrying a data-URL header)
    /// with an optional instruction and returns the complete text response.
    pub async fn analyze_image(
        &self,
        base64_image: &str,
        mime_type: &str,
        prompt: Option<&str>,
    ) -> Result<String> {
        let prompt = match prompt {
            Some(p) if !p.trim().is_empty() => p,
            _ => DEFAULT_PROMPT,
        };

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: strip_data_url_header(base64_image).to_string(),
                        },
                    },
                    Part::Text {
                        text: prompt.to_string(),
                    },
                ],
            }],
            system_instruction: None,
            generation_config: None,
        };

        let url = self.endpoint(&self.config().chat_model, "generateContent");
        let response = self.post(&url, &request).await?;
        let body: GenerateContentResponse = response.json().await?;
        Ok(body.text())
    }
}

/// Drops a `data:<mime>;base64,` header if present, leaving bare base64.
pub fn strip_data_url_header(data: &str) -> &str {
    match data.split_once(',') {
        Some((header, rest)) if header.starts_with("data:") => rest,
        _ => data,
    }
}
