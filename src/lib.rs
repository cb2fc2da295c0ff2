/// Folio - serverless handlers behind a personal portfolio website.
///
/// This crate implements three independent AWS Lambda functions:
/// 1. A Chat Lambda that answers visitor questions through a Bedrock-hosted model
///    speaking with a fixed persona
/// 2. An Enqueue Lambda that accepts contact-form submissions and queues them on SQS
/// 3. A Notify Lambda that consumes queued submissions and emails them through SES
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - SQS to decouple form submission from email delivery
/// - Bedrock Runtime for text generation
/// - SES for outbound email
/// - Tokio for async runtime
///
/// Every boundary service sits behind a trait in [`clients`], and each handler
/// struct receives its client at construction time.
///
/// # Example
///
/// ```no_run
/// use folio::api::chat::ChatResponder;
/// use folio::clients::BedrockModel;
/// use folio::core::persona::Persona;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     folio::setup_logging();
///
///     let shared = aws_config::from_env().load().await;
///     let model = BedrockModel::new(&shared, "anthropic.claude-3-haiku-20240307-v1:0");
///     let responder = ChatResponder::new(model, Persona::builtin());
///
///     lambda_runtime::run(lambda_runtime::service_fn(|event| responder.handle(event))).await
/// }
/// ```
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod worker;

pub use errors::FolioError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level filter is read from `RUST_LOG` and
/// defaults to `info`. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// folio::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
