//! Persona document that frames every chat question.
//!
//! The persona is loaded once per cold start from the source named in
//! [`ChatConfig`](super::config::ChatConfig) and then shared by all
//! invocations served by that instance.

use std::path::Path;

use anyhow::{Context, bail};
use aws_config::SdkConfig;
use aws_sdk_ssm::Client as SsmClient;
use tracing::info;

use super::config::PersonaSource;

/// Separator placed between the persona text and the visitor's question.
pub const QUESTION_SEPARATOR: &str = "\n\nQuestion: ";

const BUILTIN_PERSONA: &str = include_str!("../../persona/default.txt");

#[derive(Debug, Clone)]
pub struct Persona {
    text: String,
}

impl Persona {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PERSONA)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Builds the single-turn prompt sent to the model.
    #[must_use]
    pub fn compose_prompt(&self, question: &str) -> String {
        format!("{}{QUESTION_SEPARATOR}{question}", self.text)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is blank.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading persona file {}", path.display()))?;
        Self::non_blank(text).with_context(|| format!("persona file {}", path.display()))
    }

    /// # Errors
    ///
    /// Returns an error if the parameter cannot be fetched or has no value.
    pub async fn from_parameter(client: &SsmClient, name: &str) -> anyhow::Result<Self> {
        let resp = client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .with_context(|| format!("ssm get_parameter {name}"))?;

        let Some(value) = resp.parameter.and_then(|p| p.value) else {
            bail!("ssm parameter {name} has no value");
        };
        Self::non_blank(value).with_context(|| format!("ssm parameter {name}"))
    }

    fn non_blank(text: String) -> anyhow::Result<Self> {
        if text.trim().is_empty() {
            bail!("persona text is empty");
        }
        Ok(Self { text })
    }
}

/// Resolves the configured persona source.
///
/// # Errors
///
/// Returns an error if the configured file or SSM parameter cannot be loaded.
pub async fn load_persona(source: &PersonaSource, shared: &SdkConfig) -> anyhow::Result<Persona> {
    let persona = match source {
        PersonaSource::Parameter(name) => {
            Persona::from_parameter(&SsmClient::new(shared), name).await?
        }
        PersonaSource::File(path) => Persona::from_file(path)?,
        PersonaSource::Builtin => Persona::builtin(),
    };
    info!(source = ?source, chars = persona.text.chars().count(), "Persona loaded");
    Ok(persona)
}
