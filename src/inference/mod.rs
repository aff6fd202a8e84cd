//! Hosted inference access for text generation, summarization and speech.
//!
//! Callers go through the [`InferenceProvider`] trait. Implementations never
//! return errors: any transport or decoding failure is logged and reported as
//! `None`, and callers substitute fallback text.

mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::{HuggingFaceClient, InferenceConfig, DEFAULT_ENDPOINT};

/// GPT-2 end-of-text token, sent as the padding token.
pub const GPT2_PAD_TOKEN_ID: u32 = 50256;

/// Sampling parameters for text generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub pad_token_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_full_text: Option<bool>,
}

impl GenerationParams {
    pub fn new(max_new_tokens: u32, temperature: f32) -> Self {
        Self {
            max_new_tokens,
            temperature,
            pad_token_id: GPT2_PAD_TOKEN_ID,
            return_full_text: None,
        }
    }

    pub fn without_full_text(mut self) -> Self {
        self.return_full_text = Some(false);
        self
    }
}

/// Length bounds for summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummarizationParams {
    pub max_length: u32,
    pub min_length: u32,
}

/// One candidate returned by a text generation model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedText {
    #[serde(default)]
    pub generated_text: String,
}

/// One candidate returned by a summarization model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryText {
    #[serde(default)]
    pub summary_text: String,
}

/// Access to the hosted models.
///
/// Every operation performs at most one outbound call. `None` means the
/// service was unavailable or returned something unusable.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Generate a continuation of `prompt`.
    async fn generate(&self, prompt: &str, params: &GenerationParams)
        -> Option<Vec<GeneratedText>>;

    /// Summarize `text`.
    async fn summarize(&self, text: &str, params: &SummarizationParams)
        -> Option<Vec<SummaryText>>;

    /// Synthesize speech for `text`, returning encoded audio bytes.
    async fn synthesize_speech(&self, text: &str) -> Option<Vec<u8>>;
}

/// Errors raised inside the inference client before they are logged and
/// collapsed to `None`.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_params_serialization() {
        let params = GenerationParams::new(100, 0.7);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["max_new_tokens"], 100);
        assert_eq!(json["pad_token_id"], 50256);
        assert!(json.get("return_full_text").is_none());

        let json = serde_json::to_value(params.without_full_text()).unwrap();
        assert_eq!(json["return_full_text"], false);
    }

    #[test]
    fn test_generated_text_tolerates_missing_field() {
        let parsed: Vec<GeneratedText> = serde_json::from_str(r#"[{"score": 1}]"#).unwrap();
        assert_eq!(parsed, vec![GeneratedText::default()]);
    }
}
