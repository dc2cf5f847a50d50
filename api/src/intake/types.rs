//! Submission and record types.
//!
//! Field names on the wire are camelCase to match the web frontend:
//! - `BusinessInquiry`: partnership form body, stored once accepted
//! - `InquiryRecord`: an accepted inquiry with its reference id and timestamp
//! - `ContactRequest`: general contact form body, logged only

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business partnership inquiry as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInquiry {
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub business_type: String,
    /// Free-form description of locations (optional)
    #[serde(default)]
    pub locations: Option<String>,
    /// Business website (optional)
    #[serde(default)]
    pub website: Option<String>,
    pub message: String,
}

/// An accepted business inquiry.
///
/// Records are created once, at acceptance time, and never change afterwards.
/// Serializes flat: the inquiry fields followed by `referenceId` and
/// `receivedAt`. This is also the body POSTed to the partner webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    #[serde(flatten)]
    inquiry: BusinessInquiry,
    reference_id: String,
    received_at: DateTime<Utc>,
}

impl InquiryRecord {
    /// Stamp an inquiry with a fresh reference id and the current UTC time.
    pub fn new(inquiry: BusinessInquiry) -> Self {
        Self {
            inquiry,
            reference_id: Uuid::new_v4().to_string(),
            received_at: Utc::now(),
        }
    }

    pub fn inquiry(&self) -> &BusinessInquiry {
        &self.inquiry
    }

    /// Correlation token handed back to the submitter.
    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// General contact message. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
