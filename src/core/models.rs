use serde::{Deserialize, Serialize};

/// Body of a Chat Lambda request: the visitor's question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body of every Chat Lambda response: either an answer or an error, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Answer { response: String },
    Failure { error: String },
}

/// A contact-form submission as the Notifier expects it on the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub message: String,
}

/// One record of an SQS event. Only the fields the Notifier reads are modelled.
///
/// `body` is the serialized [`Submission`] exactly as the Enqueue Lambda sent it.
#[derive(Debug, Clone, Deserialize)]
pub struct QueuedMessage {
    #[serde(rename = "messageId")]
    pub message_id: String,
    pub body: String,
    #[serde(default)]
    pub attributes: DeliveryAttributes,
}

/// Delivery metadata SQS attaches to a record. Values arrive as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeliveryAttributes {
    #[serde(rename = "ApproximateReceiveCount")]
    pub approximate_receive_count: Option<String>,
    #[serde(rename = "SentTimestamp")]
    pub sent_timestamp: Option<String>,
}

/// One notification email, built per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Used as both sender and destination.
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub reply_to: Option<String>,
}

/// Partial batch response understood by the SQS event source mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SqsBatchResponse {
    #[serde(rename = "batchItemFailures")]
    pub batch_item_failures: Vec<BatchItemFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItemFailure {
    #[serde(rename = "itemIdentifier")]
    pub item_identifier: String,
}
