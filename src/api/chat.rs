//! Chat Lambda: answers a visitor's question in the voice of the persona.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};

use super::helpers;
use crate::clients::{InferenceRequest, TextModel};
use crate::core::models::{ChatRequest, ChatResponse};
use crate::core::persona::Persona;
use crate::errors::FolioError;

/// Message returned to clients when error details are not exposed.
pub const GENERIC_FAILURE: &str = "Sorry, I couldn't answer that right now. Please try again later.";

pub struct ChatResponder<M> {
    model: M,
    persona: Persona,
    expose_error_details: bool,
}

impl<M: TextModel> ChatResponder<M> {
    #[must_use]
    pub fn new(model: M, persona: Persona) -> Self {
        Self {
            model,
            persona,
            expose_error_details: false,
        }
    }

    /// Echo raw error text in the `error` field instead of [`GENERIC_FAILURE`].
    #[must_use]
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Lambda entrypoint.
    ///
    /// # Errors
    ///
    /// Never fails; every failure is turned into a 500 response.
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<Value, Error> {
        let span = info_span!("chat", request_id = %event.context.request_id);
        Ok(self.respond(&event.payload).instrument(span).await)
    }

    /// Builds the proxy response for one API Gateway event.
    pub async fn respond(&self, payload: &Value) -> Value {
        if helpers::is_preflight(payload) {
            return helpers::preflight();
        }

        match self.answer(payload).await {
            Ok(response) => {
                info!(chars = response.chars().count(), "Chat answer generated");
                helpers::json_response(200, &ChatResponse::Answer { response })
            }
            Err(e) => {
                error!("Chat request failed: {}", e);
                let error = if self.expose_error_details {
                    e.to_string()
                } else {
                    GENERIC_FAILURE.to_string()
                };
                helpers::json_response(500, &ChatResponse::Failure { error })
            }
        }
    }

    async fn answer(&self, payload: &Value) -> Result<String, FolioError> {
        let body = helpers::extract_body(payload)?;
        let request: ChatRequest = serde_json::from_str(&body)?;

        if request.message.trim().is_empty() {
            return Err(FolioError::ParseError("message must not be empty".to_string()));
        }

        let prompt = self.persona.compose_prompt(&request.message);

        #[cfg(feature = "debug-logs")]
        tracing::debug!("Using prompt:\n{}", prompt);

        let text = self.model.generate(&InferenceRequest::new(prompt)).await?;

        if text.trim().is_empty() {
            return Err(FolioError::InferenceError(
                "Model returned an empty completion".to_string(),
            ));
        }

        Ok(text)
    }
}
