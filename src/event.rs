//! Incoming S3 bucket-management event model.
//!
//! Events arrive as EventBridge-style JSON describing a control-plane
//! action on a bucket (e.g. `CreateBucket`, `PutBucketPolicy`). The
//! schema is treated as untrusted: every field is optional, and a value
//! of the wrong shape at any nesting level (a string where an object was
//! expected, a number where a string was expected) degrades to that
//! subtree's default instead of failing deserialization. Unrecognized
//! fields are ignored.

use {
    serde::{de::DeserializeOwned, Deserialize, Deserializer},
    serde_json::Value,
};

/// Deserializes a field leniently: any value that does not match the
/// target type yields the type's default instead of an error.
///
/// Combined with `#[serde(default)]` this makes event parsing total:
/// absent, `null`, and wrong-shape values all land on the default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// One S3 bucket-management event as delivered by the external trigger.
///
/// Constructed fresh per invocation and discarded after the
/// notification is built; nothing here is retained across events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BucketEvent {
    /// Region the action was performed in.
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    /// Event timestamp. Expected to be ISO-8601 but carried as an
    /// opaque string; never parsed or validated here.
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<String>,
    /// Action-specific payload.
    #[serde(default, deserialize_with = "lenient")]
    pub detail: EventDetail,
}

/// The `detail` payload of a bucket-management event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDetail {
    /// Name of the control-plane action (e.g. `CreateBucket`).
    #[serde(default, rename = "eventName", deserialize_with = "lenient")]
    pub event_name: Option<String>,
    /// Parameters the caller supplied with the request.
    #[serde(default, rename = "requestParameters", deserialize_with = "lenient")]
    pub request_parameters: RequestParameters,
    /// Identity that performed the action.
    #[serde(default, rename = "userIdentity", deserialize_with = "lenient")]
    pub user_identity: UserIdentity,
}

/// Request parameters of the bucket action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestParameters {
    /// Bucket the action targeted.
    #[serde(default, rename = "bucketName", deserialize_with = "lenient")]
    pub bucket_name: Option<String>,
}

/// Caller identity attached to the event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserIdentity {
    /// ARN of the principal that performed the action.
    #[serde(default, deserialize_with = "lenient")]
    pub arn: Option<String>,
}
