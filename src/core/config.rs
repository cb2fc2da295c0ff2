use std::env;
use std::path::PathBuf;

use chrono_tz::Tz;
use url::Url;

use crate::errors::FolioError;

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_REGION: &str = "eu-central-1";
pub const DEFAULT_EMAIL_SUBJECT: &str = "New message from CV DevOps";
pub const DEFAULT_TIMEZONE: &str = "Europe/Warsaw";

/// Where the chat persona is loaded from at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonaSource {
    /// SSM Parameter Store name, read with decryption.
    Parameter(String),
    /// Local file shipped next to the binary.
    File(PathBuf),
    /// The document compiled into the crate.
    Builtin,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub model_id: String,
    pub region: String,
    pub persona: PersonaSource,
    pub expose_error_details: bool,
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, FolioError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FolioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let persona = if let Some(name) = non_empty(&lookup, "PERSONA_PARAMETER") {
            PersonaSource::Parameter(name)
        } else if let Some(path) = non_empty(&lookup, "PERSONA_PATH") {
            PersonaSource::File(PathBuf::from(path))
        } else {
            PersonaSource::Builtin
        };

        Ok(Self {
            model_id: non_empty(&lookup, "BEDROCK_MODEL_ID")
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            region: non_empty(&lookup, "BEDROCK_REGION")
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            persona,
            expose_error_details: flag(&lookup, "EXPOSE_ERROR_DETAILS")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct EnqueueConfig {
    pub queue_url: String,
}

impl EnqueueConfig {
    pub fn from_env() -> Result<Self, FolioError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FolioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let queue_url = required(&lookup, "SQS_QUEUE_URL")?;
        Url::parse(&queue_url)
            .map_err(|e| FolioError::ConfigError(format!("SQS_QUEUE_URL: {e}")))?;
        Ok(Self { queue_url })
    }
}

#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub recipient: String,
    pub subject: String,
    pub timezone: Tz,
}

impl NotifyConfig {
    pub fn from_env() -> Result<Self, FolioError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FolioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = non_empty(&lookup, "NOTIFY_TIMEZONE")
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string())
            .parse::<Tz>()
            .map_err(|e| FolioError::ConfigError(format!("NOTIFY_TIMEZONE: {e}")))?;

        Ok(Self {
            recipient: required(&lookup, "RECIPIENT_MAIL")?,
            subject: non_empty(&lookup, "EMAIL_SUBJECT")
                .unwrap_or_else(|| DEFAULT_EMAIL_SUBJECT.to_string()),
            timezone,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String, FolioError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key)
        .ok_or_else(|| FolioError::ConfigError(format!("{key}: environment variable not found")))
}

fn flag<F>(lookup: &F, key: &str) -> Result<bool, FolioError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key).map(|v| v.to_ascii_lowercase()).as_deref() {
        None | Some("0" | "false" | "no") => Ok(false),
        Some("1" | "true" | "yes") => Ok(true),
        Some(other) => Err(FolioError::ConfigError(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}
