use folio::api::SubmissionEnqueuer;
use folio::clients::SqsQueue;
use folio::core::config::EnqueueConfig;
use lambda_runtime::{Error, run, service_fn};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    folio::setup_logging();

    let config = EnqueueConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let shared = aws_config::from_env().load().await;
    let enqueuer = SubmissionEnqueuer::new(SqsQueue::new(&shared, config.queue_url));

    run(service_fn(|event| enqueuer.handle(event))).await
}
