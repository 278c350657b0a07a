use std::env;

use eyre::{eyre, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_VOICE: &str = "Kore";

/// Configuration for the generative-AI client.
///
/// Only the API key is required; the endpoint, model names, and the
/// text-to-speech voice all have working defaults.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the generative-AI endpoint (required)
    pub api_key: String,
    /// Base URL for the API (defaults to the hosted endpoint)
    pub base_url: String,
    /// Model used for chat and image analysis
    pub chat_model: String,
    /// Model used for speech synthesis
    pub tts_model: String,
    /// Prebuilt voice name for speech synthesis
    pub voice: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| eyre!("GEMINI_API_KEY environment variable not set"))?;

        Ok(Self {
            api_key,
            base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            chat_model: env::var("GEMINI_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            tts_model: env::var("GEMINI_TTS_MODEL")
                .unwrap_or_else(|_| DEFAULT_TTS_MODEL.to_string()),
            voice: env::var("GEMINI_TTS_VOICE").unwrap_or_else(|_| DEFAULT_VOICE.to_string()),
        })
    }

    /// Configuration with defaults around an explicit key. Useful in tests.
    pub fn with_key(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
        }
    }
}
