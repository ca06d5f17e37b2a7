//! Output module for notification formatting and delivery.
//!
//! This module provides:
//! - [`Notification`] - The formatted subject/body built from one event
//! - [`Publisher`] - Trait seam for delivering a notification
//! - [`SnsPublisher`] - SNS-backed publisher implementation

mod notification;
mod publisher;

pub use notification::{
    Notification, UNKNOWN_BUCKET, UNKNOWN_EVENT, UNKNOWN_REGION, UNKNOWN_TIME, UNKNOWN_USER,
};
pub use publisher::{PublishError, Publisher, SnsPublisher};
