//! Hugging Face Inference API client.
//!
//! Each hosted model is invoked with `POST {endpoint}/{model}` and a JSON body
//! of the form `{"inputs": ..., "parameters": {...}}`.

mod config;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, warn};

pub use config::{InferenceConfig, DEFAULT_ENDPOINT};

use super::{
    GeneratedText, GenerationParams, InferenceError, InferenceProvider, SummarizationParams,
    SummaryText,
};

/// Request body shared by every model invocation.
#[derive(Debug, Serialize)]
struct InvokeRequest<'a, P: Serialize> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a P>,
}

/// Client for the hosted inference API.
pub struct HuggingFaceClient {
    config: InferenceConfig,
    client: Client,
}

impl HuggingFaceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| InferenceError::Connection(e.to_string()))?;

        if !config.has_api_key() {
            warn!("No inference API key configured; all model calls will use fallback text");
        }

        Ok(Self { config, client })
    }

    /// Invoke a model and decode its JSON response.
    async fn invoke_json<P, R>(
        &self,
        model: &str,
        inputs: &str,
        parameters: Option<&P>,
    ) -> Result<R, InferenceError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let resp = self.post(model, inputs, parameters).await?;
        resp.json()
            .await
            .map_err(|e| InferenceError::Parse(e.to_string()))
    }

    /// Invoke a model and return its raw response body.
    async fn invoke_bytes(&self, model: &str, inputs: &str) -> Result<Vec<u8>, InferenceError> {
        let resp = self.post::<()>(model, inputs, None).await?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| InferenceError::Connection(e.to_string()))?;
        if bytes.is_empty() {
            return Err(InferenceError::Parse("Empty audio response".to_string()));
        }
        Ok(bytes.to_vec())
    }

    async fn post<P>(
        &self,
        model: &str,
        inputs: &str,
        parameters: Option<&P>,
    ) -> Result<reqwest::Response, InferenceError>
    where
        P: Serialize + Sync,
    {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(InferenceError::MissingApiKey)?;

        let url = self.config.model_url(model);
        debug!("Invoking model {} ({} chars of input)", model, inputs.len());

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&InvokeRequest { inputs, parameters })
            .send()
            .await
            .map_err(|e| InferenceError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Api { status, body });
        }

        Ok(resp)
    }
}

#[async_trait]
impl InferenceProvider for HuggingFaceClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Option<Vec<GeneratedText>> {
        self.invoke_json(&self.config.generation_model, prompt, Some(params))
            .await
            .map_err(|e| error!("Text generation API error: {}", e))
            .ok()
    }

    async fn summarize(
        &self,
        text: &str,
        params: &SummarizationParams,
    ) -> Option<Vec<SummaryText>> {
        self.invoke_json(&self.config.summarization_model, text, Some(params))
            .await
            .map_err(|e| error!("Summarization API error: {}", e))
            .ok()
    }

    async fn synthesize_speech(&self, text: &str) -> Option<Vec<u8>> {
        self.invoke_bytes(&self.config.speech_model, text)
            .await
            .map_err(|e| error!("TTS API error: {}", e))
            .ok()
    }
}
