//! Text-to-speech synthesis.
//!
//! The endpoint answers with base64-encoded raw PCM: 16-bit little-endian
//! mono samples at 24 kHz. Decoding into a playable buffer and playback
//! control are the consumer's job.

use base64::Engine;
use eyre::{eyre, Result};

use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};
use crate::GeminiClient;

/// Sample rate of the synthesized audio.
pub const SAMPLE_RATE: u32 = 24_000;
/// The stream is mono.
pub const CHANNELS: u16 = 1;

impl GeminiClient {
    /// Synthesizes speech for the given text and returns the raw 16-bit
    /// mono PCM samples.
    pub async fn synthesize_speech(&self, text: &str) -> Result<Vec<i16>> {
        let request = GenerateContentRequest {
            contents: vec![Content::text("user", text)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: self.config().voice.clone(),
                        },
                    },
                }),
            }),
        };

        let url = self.endpoint(&self.config().tts_model, "generateContent");
        let response = self.post(&url, &request).await?;
        let body: GenerateContentResponse = response.json().await?;

        let inline = body
            .inline_data()
            .ok_or_else(|| eyre!("No audio data received"))?;
        let bytes = base64::engine::general_purpose::STANDARD.decode(&inline.data)?;
        Ok(decode_pcm16(&bytes))
    }
}

/// Reinterprets raw bytes as little-endian 16-bit samples. A trailing odd
/// byte is dropped.
pub fn decode_pcm16(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Converts samples to normalized f32 in [-1, 1], the form audio sinks
/// typically want for playback buffers.
pub fn samples_to_f32(samples: &[i16]) -> Vec<f32> {
    samples.iter().map(|s| f32::from(*s) / 32768.0).collect()
}
