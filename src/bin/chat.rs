use aws_sdk_bedrockruntime::config::Region;
use folio::api::ChatResponder;
use folio::clients::BedrockModel;
use folio::core::config::ChatConfig;
use folio::core::persona::load_persona;
use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    folio::setup_logging();

    let config = ChatConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // The persona parameter lives in the function's own region; the model may not.
    let shared = aws_config::from_env().load().await;
    let bedrock_shared = aws_config::from_env()
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let persona = load_persona(&config.persona, &shared).await?;
    let model = BedrockModel::new(&bedrock_shared, config.model_id.clone());
    let responder =
        ChatResponder::new(model, persona).with_error_details(config.expose_error_details);

    info!(model_id = %config.model_id, region = %config.region, "Chat Lambda ready");
    run(service_fn(|event| responder.handle(event))).await
}
