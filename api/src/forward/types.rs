//! Delivery outcome and error types for the partner webhook.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Reason reported when no webhook URL is configured.
pub const WEBHOOK_NOT_CONFIGURED: &str = "webhook_not_configured";

/// Outcome of one forwarding attempt.
///
/// Serialized as `{"delivered": true, "status_code": 200}` or
/// `{"delivered": false, "reason": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    /// The destination answered with a success status.
    Delivered { status_code: u16 },
    /// Forwarding was skipped or failed.
    NotDelivered { reason: String },
}

impl DeliveryResult {
    pub fn not_configured() -> Self {
        DeliveryResult::NotDelivered {
            reason: WEBHOOK_NOT_CONFIGURED.to_string(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryResult::Delivered { .. })
    }

    /// Failure reason, if not delivered.
    pub fn reason(&self) -> Option<&str> {
        match self {
            DeliveryResult::Delivered { .. } => None,
            DeliveryResult::NotDelivered { reason } => Some(reason.as_str()),
        }
    }
}

impl Serialize for DeliveryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DeliveryResult", 2)?;
        match self {
            DeliveryResult::Delivered { status_code } => {
                state.serialize_field("delivered", &true)?;
                state.serialize_field("status_code", status_code)?;
            }
            DeliveryResult::NotDelivered { reason } => {
                state.serialize_field("delivered", &false)?;
                state.serialize_field("reason", reason)?;
            }
        }
        state.end()
    }
}

/// Why a configured delivery failed. Always downgraded to
/// [`DeliveryResult::NotDelivered`] before it reaches a handler.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport failure, timeout, or non-success status
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("delivery task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl DeliveryError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DeliveryError::Http(e) if e.is_timeout())
    }
}
