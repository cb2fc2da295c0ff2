use folio::clients::SesMailer;
use folio::core::config::NotifyConfig;
use folio::worker::SubmissionNotifier;
use lambda_runtime::{Error, run, service_fn};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    folio::setup_logging();

    let config = NotifyConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let shared = aws_config::from_env().load().await;
    let notifier = SubmissionNotifier::new(SesMailer::new(&shared), &config);

    run(service_fn(|event| notifier.handle(event))).await
}
