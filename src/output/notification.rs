//! Notification formatting for bucket-management events.
//!
//! This is the pure core of the service: it extracts the five fields of
//! interest from a [`BucketEvent`], substitutes a documented placeholder
//! for each one that is missing, and renders the fixed subject/body
//! templates. It performs no I/O and never fails.

use crate::event::BucketEvent;

// Placeholder strings substituted for absent fields
/// Placeholder for a missing `detail.eventName`.
pub const UNKNOWN_EVENT: &str = "UnknownEvent";
/// Placeholder for a missing `detail.requestParameters.bucketName`.
pub const UNKNOWN_BUCKET: &str = "UnknownBucket";
/// Placeholder for a missing `detail.userIdentity.arn`.
pub const UNKNOWN_USER: &str = "UnknownUser";
/// Placeholder for a missing top-level `region`.
pub const UNKNOWN_REGION: &str = "UnknownRegion";
/// Placeholder for a missing top-level `time`.
pub const UNKNOWN_TIME: &str = "UnknownTime";

/// A formatted notification ready to hand to a publisher.
///
/// Holds the email subject line and the newline-separated plain-text
/// body. Built per event, published once, not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Subject line: `S3 Event: {eventName}`.
    pub subject: String,
    /// Plain-text body listing event name, bucket, user, region, time.
    pub body: String,
}

impl Notification {
    /// Formats a bucket-management event into a notification.
    ///
    /// Total function: every missing field is replaced by its
    /// placeholder, so any parseable event produces a notification.
    /// Field values are interpolated verbatim; no validation of ARNs,
    /// bucket names, or timestamps happens here.
    pub fn from_event(event: &BucketEvent) -> Self {
        let event_name = event.detail.event_name.as_deref().unwrap_or(UNKNOWN_EVENT);
        let bucket_name = event
            .detail
            .request_parameters
            .bucket_name
            .as_deref()
            .unwrap_or(UNKNOWN_BUCKET);
        let user_arn = event
            .detail
            .user_identity
            .arn
            .as_deref()
            .unwrap_or(UNKNOWN_USER);
        let region = event.region.as_deref().unwrap_or(UNKNOWN_REGION);
        let time = event.time.as_deref().unwrap_or(UNKNOWN_TIME);

        Self {
            subject: format!("S3 Event: {event_name}"),
            body: format!(
                "S3 Event Notification\n\n\
                 Event: {event_name}\n\
                 Bucket: {bucket_name}\n\
                 User: {user_arn}\n\
                 Region: {region}\n\
                 Time: {time}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn event_from(value: serde_json::Value) -> BucketEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_event_renders_exact_template() {
        let event = event_from(json!({
            "region": "us-east-2",
            "time": "2025-09-09T14:32:10Z",
            "detail": {
                "eventName": "CreateBucket",
                "requestParameters": { "bucketName": "my-new-bucket" },
                "userIdentity": { "arn": "arn:aws:iam::123456789012:user/amy" }
            }
        }));

        let notification = Notification::from_event(&event);
        assert_eq!(notification.subject, "S3 Event: CreateBucket");
        assert_eq!(
            notification.body,
            "S3 Event Notification\n\
             \n\
             Event: CreateBucket\n\
             Bucket: my-new-bucket\n\
             User: arn:aws:iam::123456789012:user/amy\n\
             Region: us-east-2\n\
             Time: 2025-09-09T14:32:10Z"
        );
    }

    #[test]
    fn test_full_event_contains_no_placeholders() {
        let event = event_from(json!({
            "region": "eu-central-1",
            "time": "2025-01-01T00:00:00Z",
            "detail": {
                "eventName": "PutBucketPolicy",
                "requestParameters": { "bucketName": "audit-logs" },
                "userIdentity": { "arn": "arn:aws:iam::123456789012:role/ops" }
            }
        }));

        let notification = Notification::from_event(&event);
        for placeholder in [
            UNKNOWN_EVENT,
            UNKNOWN_BUCKET,
            UNKNOWN_USER,
            UNKNOWN_REGION,
            UNKNOWN_TIME,
        ] {
            assert!(!notification.body.contains(placeholder));
        }
    }

    #[test]
    fn test_empty_event_uses_all_placeholders() {
        let notification = Notification::from_event(&event_from(json!({})));

        assert_eq!(notification.subject, "S3 Event: UnknownEvent");
        assert_eq!(
            notification.body,
            "S3 Event Notification\n\
             \n\
             Event: UnknownEvent\n\
             Bucket: UnknownBucket\n\
             User: UnknownUser\n\
             Region: UnknownRegion\n\
             Time: UnknownTime"
        );
    }

    #[test]
    fn test_empty_detail_matches_absent_detail() {
        let with_empty = Notification::from_event(&event_from(json!({ "detail": {} })));
        let without = Notification::from_event(&event_from(json!({})));
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_missing_request_parameters_defaults_bucket_only() {
        let event = event_from(json!({
            "region": "us-west-2",
            "detail": {
                "eventName": "DeleteBucket",
                "userIdentity": { "arn": "arn:aws:iam::123456789012:user/bob" }
            }
        }));

        let notification = Notification::from_event(&event);
        assert!(notification.body.contains("Bucket: UnknownBucket"));
        assert!(notification.body.contains("Event: DeleteBucket"));
        assert!(notification
            .body
            .contains("User: arn:aws:iam::123456789012:user/bob"));
        assert!(notification.body.contains("Region: us-west-2"));
        assert!(notification.body.contains("Time: UnknownTime"));
    }

    #[test]
    fn test_wrong_shape_detail_renders_detail_placeholders() {
        let event = event_from(json!({
            "region": "sa-east-1",
            "time": "2025-03-03T03:03:03Z",
            "detail": "oops"
        }));

        let notification = Notification::from_event(&event);
        assert_eq!(notification.subject, "S3 Event: UnknownEvent");
        assert!(notification.body.contains("Bucket: UnknownBucket"));
        assert!(notification.body.contains("User: UnknownUser"));
        assert!(notification.body.contains("Region: sa-east-1"));
        assert!(notification.body.contains("Time: 2025-03-03T03:03:03Z"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let event = event_from(json!({
            "region": "us-east-1",
            "detail": { "eventName": "CreateBucket" }
        }));

        let first = Notification::from_event(&event);
        let second = Notification::from_event(&event);
        assert_eq!(first, second);
    }
}
