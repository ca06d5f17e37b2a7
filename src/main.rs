//! S3 bucket-management event notifier.
//!
//! Receives one EventBridge-style event per invocation describing a
//! bucket control-plane action, formats a human-readable notification,
//! and publishes it to an SNS topic for email fan-out.

use {
    crate::{
        config::Config,
        event::BucketEvent,
        output::SnsPublisher,
    },
    lambda_runtime::{run, service_fn, Error, LambdaEvent},
};

mod config;
mod event;
mod handler;
mod output;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    // Missing topic configuration is fatal: refuse to serve events.
    let config = Config::from_env()?;
    log::info!("notification topic: {}", config.topic_arn);

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let publisher = SnsPublisher::new(aws_sdk_sns::Client::new(&aws_config));
    log::info!("initialized sns client");

    let shared_publisher = &publisher;
    let topic_arn = config.topic_arn;

    run(service_fn(move |event: LambdaEvent<BucketEvent>| {
        let topic_arn = topic_arn.clone();
        async move { handler::handle(shared_publisher, &topic_arn, event.payload).await }
    }))
    .await
}
