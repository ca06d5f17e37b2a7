//! Publisher seam for notification delivery.
//!
//! Delivery goes through the [`Publisher`] trait so the handler can be
//! exercised with a test double. The production implementation,
//! [`SnsPublisher`], hands the subject/body to an SNS topic and leaves
//! fan-out (email delivery, subscriptions) to SNS itself. No retry or
//! backoff happens here; a failed publish is returned to the caller.

use async_trait::async_trait;

/// Boxed error returned by publish attempts.
pub type PublishError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Delivers one formatted notification to a target channel.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes one message to `target`.
    ///
    /// # Arguments
    ///
    /// * `target` - Opaque channel identifier (for SNS, the topic ARN)
    /// * `subject` - Subject line for subscribers that support one
    /// * `body` - Plain-text message body
    async fn publish(&self, target: &str, subject: &str, body: &str) -> Result<(), PublishError>;
}

/// SNS-backed publisher.
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    /// Creates a publisher over an already-configured SNS client.
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(&self, target: &str, subject: &str, body: &str) -> Result<(), PublishError> {
        self.client
            .publish()
            .topic_arn(target)
            .subject(subject)
            .message(body)
            .send()
            .await?;
        Ok(())
    }
}
