use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ses::Client as SesClient;
use aws_sdk_ses::types::{Body, Content, Destination, Message};

use super::EmailSender;
use crate::core::models::EmailMessage;
use crate::errors::FolioError;

/// SES-backed mailer. The configured address is both sender and recipient.
pub struct SesMailer {
    client: SesClient,
}

impl SesMailer {
    #[must_use]
    pub fn new(shared: &SdkConfig) -> Self {
        Self {
            client: SesClient::new(shared),
        }
    }
}

fn text_content(data: &str) -> Result<Content, FolioError> {
    Content::builder()
        .data(data)
        .charset("UTF-8")
        .build()
        .map_err(|e| FolioError::EmailError(format!("Invalid email content: {e}")))
}

#[async_trait]
impl EmailSender for SesMailer {
    async fn send(&self, email: &EmailMessage) -> Result<(), FolioError> {
        let message = Message::builder()
            .subject(text_content(&email.subject)?)
            .body(Body::builder().text(text_content(&email.body)?).build())
            .build();

        let mut request = self
            .client
            .send_email()
            .source(&email.recipient)
            .destination(
                Destination::builder()
                    .to_addresses(&email.recipient)
                    .build(),
            )
            .message(message);

        if let Some(reply_to) = &email.reply_to {
            request = request.reply_to_addresses(reply_to);
        }

        request
            .send()
            .await
            .map_err(|e| FolioError::EmailError(format!("ses send_email: {e}")))?;
        Ok(())
    }
}
