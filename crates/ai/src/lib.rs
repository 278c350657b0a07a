//! # Academy AI
//!
//! Thin client for the generative-AI endpoint behind the portal's three
//! assistant tools: streaming chat, single-image analysis, and speech
//! synthesis. Every call is a stateless request/response (or
//! request/stream) round-trip; there is no retry and no session kept on
//! the remote side.

pub mod chat;
pub mod config;
pub mod speech;
pub mod vision;
pub mod wire;

use eyre::{eyre, Result};

use config::AiConfig;

pub struct GeminiClient {
    client: reqwest::Client,
    config: AiConfig,
}

impl GeminiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    async fn post(&self, url: &str, body: &wire::GenerateContentRequest) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(eyre!("AI endpoint returned HTTP {status}: {detail}"));
        }

        Ok(response)
    }
}
