use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client as SqsClient;
use tracing::info;

use super::SubmissionQueue;
use crate::errors::FolioError;

/// SQS-backed submission queue.
pub struct SqsQueue {
    client: SqsClient,
    queue_url: String,
}

impl SqsQueue {
    #[must_use]
    pub fn new(shared: &SdkConfig, queue_url: impl Into<String>) -> Self {
        Self {
            client: SqsClient::new(shared),
            queue_url: queue_url.into(),
        }
    }
}

#[async_trait]
impl SubmissionQueue for SqsQueue {
    async fn submit(&self, body: String) -> Result<(), FolioError> {
        let resp = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| FolioError::QueueError(format!("Failed to send message to SQS: {e}")))?;

        info!(
            message_id = resp.message_id().unwrap_or_default(),
            "Submission sent to SQS"
        );
        Ok(())
    }
}
