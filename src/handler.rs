//! Invocation wrapper: one event in, one publish out.

use {
    crate::{
        event::BucketEvent,
        output::{Notification, Publisher, UNKNOWN_BUCKET, UNKNOWN_EVENT},
    },
    lambda_runtime::Error,
};

/// Handles one bucket-management event.
///
/// Formats the event into a notification and publishes it to
/// `topic_arn` exactly once. Publish failures are propagated to the
/// caller unchanged; the triggering infrastructure owns retry policy.
pub async fn handle(
    publisher: &impl Publisher,
    topic_arn: &str,
    event: BucketEvent,
) -> Result<(), Error> {
    let notification = Notification::from_event(&event);

    log::info!(
        "publishing notification: event={}, bucket={}",
        event.detail.event_name.as_deref().unwrap_or(UNKNOWN_EVENT),
        event
            .detail
            .request_parameters
            .bucket_name
            .as_deref()
            .unwrap_or(UNKNOWN_BUCKET),
    );

    publisher
        .publish(topic_arn, &notification.subject, &notification.body)
        .await?;

    Ok(())
}
