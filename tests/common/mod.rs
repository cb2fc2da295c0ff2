#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use folio::FolioError;
use folio::clients::{EmailSender, InferenceRequest, SubmissionQueue, TextModel};
use folio::core::models::EmailMessage;
use serde_json::{Value, json};

/// Text model that replays a fixed reply and records every request.
pub struct MockModel {
    reply: Result<String, String>,
    pub calls: Mutex<Vec<InferenceRequest>>,
}

impl MockModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<InferenceRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for MockModel {
    async fn generate(&self, request: &InferenceRequest) -> Result<String, FolioError> {
        self.calls.lock().unwrap().push(request.clone());
        self.reply
            .clone()
            .map_err(FolioError::InferenceError)
    }
}

#[derive(Default)]
pub struct MockQueue {
    pub fail: bool,
    pub sent: Mutex<Vec<String>>,
}

impl MockQueue {
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionQueue for MockQueue {
    async fn submit(&self, body: String) -> Result<(), FolioError> {
        if self.fail {
            return Err(FolioError::QueueError("AccessDenied".to_string()));
        }
        self.sent.lock().unwrap().push(body);
        Ok(())
    }
}

/// Mailer that rejects any email whose body contains `reject_marker`.
#[derive(Default)]
pub struct MockMailer {
    pub reject_marker: Option<String>,
    pub sent: Mutex<Vec<EmailMessage>>,
}

impl MockMailer {
    pub fn rejecting(marker: &str) -> Self {
        Self {
            reject_marker: Some(marker.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockMailer {
    async fn send(&self, email: &EmailMessage) -> Result<(), FolioError> {
        if let Some(marker) = &self.reject_marker {
            if email.body.contains(marker.as_str()) {
                return Err(FolioError::EmailError("Throttling".to_string()));
            }
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// API Gateway REST proxy event with a POST body.
pub fn proxy_event(body: &str) -> Value {
    json!({
        "httpMethod": "POST",
        "path": "/",
        "headers": { "Content-Type": "application/json" },
        "body": body,
        "isBase64Encoded": false
    })
}

pub fn sqs_record(message_id: &str, body: &str) -> Value {
    json!({
        "messageId": message_id,
        "receiptHandle": format!("handle-{message_id}"),
        "body": body,
        "attributes": {
            "ApproximateReceiveCount": "1",
            "SentTimestamp": "1705312800000"
        },
        "eventSource": "aws:sqs"
    })
}

pub fn sqs_event(records: Vec<Value>) -> Value {
    json!({ "Records": records })
}

/// Decodes the JSON string held in a proxy response's `body`.
pub fn response_body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}
