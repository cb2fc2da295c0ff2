//! Client modules for external AWS service interactions
//!
//! Each handler depends on exactly one of these traits, so tests can swap the
//! AWS-backed implementation for an in-memory one.

pub mod bedrock;
pub mod mailer;
pub mod queue;

use async_trait::async_trait;

use crate::core::models::EmailMessage;
use crate::errors::FolioError;

pub use bedrock::BedrockModel;
pub use mailer::SesMailer;
pub use queue::SqsQueue;

/// Output cap for a single chat answer.
pub const MAX_OUTPUT_TOKENS: u32 = 512;

/// Sampling temperature for chat answers.
pub const TEMPERATURE: f32 = 0.5;

/// A single-turn text generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl InferenceRequest {
    /// Request with the fixed chat sampling parameters.
    #[must_use]
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
pub trait TextModel: Send + Sync {
    /// Returns the first generated text segment.
    async fn generate(&self, request: &InferenceRequest) -> Result<String, FolioError>;
}

#[async_trait]
pub trait SubmissionQueue: Send + Sync {
    /// Submits one already-serialized message.
    async fn submit(&self, body: String) -> Result<(), FolioError>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &EmailMessage) -> Result<(), FolioError>;
}
