//! Inference client configuration.

use serde::{Deserialize, Serialize};

/// Hosted inference API base URL; models are addressed as `{endpoint}/{model}`.
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

/// Configuration for the hosted inference client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// API endpoint (models are appended as a path segment)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bearer credential sent with every call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model used for text generation (analysis, chat, comparison)
    #[serde(default = "default_generation_model")]
    pub generation_model: String,
    /// Model used for summarization
    #[serde(default = "default_summarization_model")]
    pub summarization_model: String,
    /// Model used for text-to-speech
    #[serde(default = "default_speech_model")]
    pub speech_model: String,
    /// Request timeout in seconds; unset uses the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_generation_model() -> String {
    "gpt2".to_string()
}

fn default_summarization_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_speech_model() -> String {
    "microsoft/speecht5_tts".to_string()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            generation_model: default_generation_model(),
            summarization_model: default_summarization_model(),
            speech_model: default_speech_model(),
            timeout_secs: None,
        }
    }
}

impl InferenceConfig {
    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `HUGGING_FACE_API_KEY` (or `HF_API_KEY`): bearer credential
    /// - `HF_API_URL`: API endpoint
    /// - `HF_GENERATION_MODEL`: text generation model
    /// - `HF_SUMMARIZATION_MODEL`: summarization model
    /// - `HF_SPEECH_MODEL`: text-to-speech model
    /// - `HF_TIMEOUT_SECS`: request timeout in seconds
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("HUGGING_FACE_API_KEY").or_else(|| lookup("HF_API_KEY")) {
            if !key.trim().is_empty() {
                self.api_key = Some(key.trim().to_string());
            }
        }
        if let Some(endpoint) = lookup("HF_API_URL") {
            self.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup("HF_GENERATION_MODEL") {
            self.generation_model = model;
        }
        if let Some(model) = lookup("HF_SUMMARIZATION_MODEL") {
            self.summarization_model = model;
        }
        if let Some(model) = lookup("HF_SPEECH_MODEL") {
            self.speech_model = model;
        }
        if let Some(val) = lookup("HF_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.timeout_secs = Some(secs);
            }
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Whether a credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Copy of this config safe to print.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api_key.is_some() {
            copy.api_key = Some("********".to_string());
        }
        copy
    }

    /// Full URL for a model.
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), model)
    }
}
