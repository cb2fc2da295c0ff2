use chrono_tz::Tz;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};

use super::email;
use crate::clients::EmailSender;
use crate::core::config::NotifyConfig;
use crate::core::models::{BatchItemFailure, QueuedMessage, SqsBatchResponse, Submission};
use crate::errors::FolioError;

/// What happened to a single queued record.
#[derive(Debug)]
pub struct RecordResult {
    pub message_id: String,
    pub outcome: Result<(), FolioError>,
}

/// Per-record results of one Notify invocation.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub results: Vec<RecordResult>,
}

impl BatchOutcome {
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_ok()).count()
    }

    /// Message ids that should be redelivered.
    #[must_use]
    pub fn failed_ids(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.outcome.is_err())
            .map(|r| r.message_id.as_str())
            .collect()
    }

    #[must_use]
    pub fn to_response(&self) -> SqsBatchResponse {
        SqsBatchResponse {
            batch_item_failures: self
                .failed_ids()
                .into_iter()
                .map(|id| BatchItemFailure {
                    item_identifier: id.to_string(),
                })
                .collect(),
        }
    }
}

/// Notify Lambda: emails every submission in an SQS batch.
pub struct SubmissionNotifier<S> {
    mailer: S,
    recipient: String,
    subject: String,
    timezone: Tz,
}

impl<S: EmailSender> SubmissionNotifier<S> {
    #[must_use]
    pub fn new(mailer: S, config: &NotifyConfig) -> Self {
        Self {
            mailer,
            recipient: config.recipient.clone(),
            subject: config.subject.clone(),
            timezone: config.timezone,
        }
    }

    #[must_use]
    pub fn mailer(&self) -> &S {
        &self.mailer
    }

    /// Lambda entrypoint. Returns the partial batch response for SQS.
    ///
    /// # Errors
    ///
    /// Returns an error only when the event has no `Records` array, which
    /// makes SQS retry the whole batch.
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<SqsBatchResponse, Error> {
        let span = info_span!("notify", request_id = %event.context.request_id);
        let outcome = self
            .process(&event.payload)
            .instrument(span)
            .await
            .map_err(|e| {
                error!("Rejected SQS event: {}", e);
                Error::from(e)
            })?;
        Ok(outcome.to_response())
    }

    /// Processes every record independently; one failure never stops the rest.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the event has no `Records` array.
    pub async fn process(&self, payload: &Value) -> Result<BatchOutcome, FolioError> {
        let records = payload
            .get("Records")
            .and_then(Value::as_array)
            .ok_or_else(|| FolioError::ParseError("SQS event has no Records array".to_string()))?;

        info!(records = records.len(), "Notify Lambda received SQS batch");

        let mut outcome = BatchOutcome::default();
        for raw in records {
            let record: QueuedMessage = match serde_json::from_value(raw.clone()) {
                Ok(r) => r,
                Err(e) => {
                    match raw.get("messageId").and_then(Value::as_str) {
                        Some(id) => {
                            error!(message_id = %id, "Malformed SQS record: {}", e);
                            outcome.results.push(RecordResult {
                                message_id: id.to_string(),
                                outcome: Err(e.into()),
                            });
                        }
                        None => warn!("Skipping SQS record without messageId: {}", e),
                    }
                    continue;
                }
            };

            let result = self.deliver(&record).await;
            match &result {
                Ok(()) => info!(message_id = %record.message_id, "Email sent"),
                Err(e) => error!(
                    message_id = %record.message_id,
                    receive_count = record.attributes.approximate_receive_count.as_deref().unwrap_or("?"),
                    "Failed to notify about submission: {}",
                    e
                ),
            }
            outcome.results.push(RecordResult {
                message_id: record.message_id,
                outcome: result,
            });
        }

        info!(
            delivered = outcome.delivered(),
            failed = outcome.failed_ids().len(),
            "SQS batch processed"
        );
        Ok(outcome)
    }

    async fn deliver(&self, record: &QueuedMessage) -> Result<(), FolioError> {
        let submission: Submission = serde_json::from_str(&record.body)?;
        let received = record
            .attributes
            .sent_timestamp
            .as_deref()
            .and_then(|ts| email::format_sent_timestamp(ts, self.timezone));

        let message = email::build_email(
            &submission,
            &self.recipient,
            &self.subject,
            received.as_deref(),
        );
        self.mailer.send(&message).await
    }
}
