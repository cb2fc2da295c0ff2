//! Bedrock Runtime text model
//!
//! Invokes Anthropic models through `InvokeModel` using the Claude Messages
//! JSON format. Bedrock takes the model id in the URL, so the body carries
//! `anthropic_version` instead of `model`.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{InferenceRequest, TextModel};
use crate::errors::FolioError;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    anthropic_version: &'static str,
    messages: [UserMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

/// Serializes a request into the Bedrock Claude Messages body.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_request(request: &InferenceRequest) -> Result<Vec<u8>, FolioError> {
    let body = MessagesRequest {
        anthropic_version: ANTHROPIC_VERSION,
        messages: [UserMessage {
            role: "user",
            content: &request.prompt,
        }],
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    };
    serde_json::to_vec(&body)
        .map_err(|e| FolioError::InferenceError(format!("Failed to serialize request: {e}")))
}

/// Extracts the first content block's text from a Bedrock response body.
///
/// # Errors
///
/// Returns an error if the body is not the expected JSON or has no text in
/// its first content block.
pub fn decode_response(raw: &[u8]) -> Result<String, FolioError> {
    let parsed: MessagesResponse = serde_json::from_slice(raw)
        .map_err(|e| FolioError::InferenceError(format!("Malformed model output: {e}")))?;

    parsed
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .ok_or_else(|| FolioError::InferenceError("Model output has no text content".to_string()))
}

pub struct BedrockModel {
    client: BedrockClient,
    model_id: String,
}

impl BedrockModel {
    #[must_use]
    pub fn new(shared: &SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: BedrockClient::new(shared),
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl TextModel for BedrockModel {
    async fn generate(&self, request: &InferenceRequest) -> Result<String, FolioError> {
        info!(
            model_id = %self.model_id,
            prompt_chars = request.prompt.chars().count(),
            max_tokens = request.max_tokens,
            "Invoking Bedrock model"
        );

        let resp = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(encode_request(request)?))
            .send()
            .await
            .map_err(|e| FolioError::InferenceError(format!("Bedrock invoke_model: {e}")))?;

        decode_response(resp.body().as_ref())
    }
}
