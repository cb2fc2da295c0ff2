//! Enqueue Lambda: forwards a contact-form body to the submission queue.
//!
//! The body only has to be valid JSON. Shape checks happen in the worker,
//! which is the only consumer that needs the individual fields.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};

use super::helpers;
use crate::clients::SubmissionQueue;
use crate::errors::FolioError;

pub const QUEUED_MESSAGE: &str = "Submission queued";
pub const FAILURE_MESSAGE: &str = "Error queuing submission";

pub struct SubmissionEnqueuer<Q> {
    queue: Q,
}

impl<Q: SubmissionQueue> SubmissionEnqueuer<Q> {
    #[must_use]
    pub fn new(queue: Q) -> Self {
        Self { queue }
    }

    #[must_use]
    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Lambda entrypoint.
    ///
    /// # Errors
    ///
    /// Never fails; every failure is turned into a 500 response.
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<Value, Error> {
        let span = info_span!("enqueue", request_id = %event.context.request_id);
        Ok(self.respond(&event.payload).instrument(span).await)
    }

    pub async fn respond(&self, payload: &Value) -> Value {
        if helpers::is_preflight(payload) {
            return helpers::preflight();
        }

        match self.enqueue(payload).await {
            Ok(()) => helpers::json_response(200, &QUEUED_MESSAGE),
            Err(e) => {
                error!("Failed to enqueue submission: {}", e);
                helpers::json_response(500, &FAILURE_MESSAGE)
            }
        }
    }

    async fn enqueue(&self, payload: &Value) -> Result<(), FolioError> {
        let body = helpers::extract_body(payload)?;
        let submission: Value = serde_json::from_str(&body)?;
        let message_body = serde_json::to_string(&submission)?;

        self.queue.submit(message_body).await?;
        info!("Submission enqueued");
        Ok(())
    }
}
