use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::config::{ConfigError, GeneratorConfig};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("API call failed: {0}")]
    RequestFailed(String),
    #[error("API returned invalid response (Status: {status})")]
    BadStatus { status: u16 },
    #[error("API response envelope is invalid: {0}")]
    BadEnvelope(String),
}

/// Raw status/body pair from the completion endpoint, before any
/// envelope unwrapping.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The engine's only view of the network. Injected so the session
/// engine can be driven by scripted fakes in tests.
pub trait GeneratorClient {
    fn send(&self, prompt: &str) -> Result<RawResponse, TransportError>;
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Blocking client for an OpenAI-compatible chat-completions endpoint.
pub struct HttpGeneratorClient {
    client: reqwest::blocking::Client,
    config: GeneratorConfig,
}

impl HttpGeneratorClient {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            client: reqwest::blocking::Client::new(),
            config,
        })
    }
}

impl GeneratorClient for HttpGeneratorClient {
    fn send(&self, prompt: &str) -> Result<RawResponse, TransportError> {
        let req = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&req)
            .send()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        debug!(status, bytes = body.len(), "generator responded");

        Ok(RawResponse { status, body })
    }
}

/// Unwraps the completion envelope down to the first choice's message
/// content. Non-2xx statuses and bodies that are not the expected
/// envelope are both transport failures; the turn aborts either way.
pub fn extract_content(response: &RawResponse) -> Result<String, TransportError> {
    if !(200..300).contains(&response.status) {
        return Err(TransportError::BadStatus {
            status: response.status,
        });
    }

    let envelope: ChatCompletionResponse = serde_json::from_str(&response.body)
        .map_err(|e| TransportError::BadEnvelope(e.to_string()))?;

    let choice = envelope
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| TransportError::BadEnvelope("no choices returned".into()))?;

    Ok(choice.message.content)
}
