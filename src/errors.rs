use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to generate answer: {0}")]
    InferenceError(String),

    #[error("Failed to submit message to queue: {0}")]
    QueueError(String),

    #[error("Failed to dispatch email: {0}")]
    EmailError(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(error: serde_json::Error) -> Self {
        FolioError::ParseError(error.to_string())
    }
}

impl From<base64::DecodeError> for FolioError {
    fn from(error: base64::DecodeError) -> Self {
        FolioError::ParseError(format!("Invalid base64 body: {error}"))
    }
}

impl From<std::string::FromUtf8Error> for FolioError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        FolioError::ParseError(format!("Body is not valid UTF-8: {error}"))
    }
}
