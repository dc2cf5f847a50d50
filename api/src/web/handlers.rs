//! HTTP endpoint handlers.
//!
//! Every request is independent. The inquiry handler is the only one with
//! side effects:
//! 1. Validate the body
//! 2. Stamp and store the inquiry
//! 3. Forward it to the partner webhook and await the outcome
//! 4. Answer `received`, whatever the delivery outcome

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::forward::{DeliveryResult, PartnerHub};
use crate::intake::{
    validate_contact, validate_inquiry, BusinessInquiry, ContactRequest, InquiryStore,
};
use crate::web::error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: InquiryStore,
    pub partner_hub: PartnerHub,
}

impl AppState {
    /// Fresh state with an empty store.
    pub fn new(partner_hub: PartnerHub) -> Self {
        Self {
            store: InquiryStore::new(),
            partner_hub,
        }
    }
}

// =============================================================================
// Informational
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Otogo backend is running",
        timestamp: Utc::now(),
    })
}

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// API root endpoint.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Otogo API",
    })
}

// =============================================================================
// Business Inquiries
// =============================================================================

/// Inquiry acceptance response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub reference_id: String,
    pub status: &'static str,
    pub webhook_delivery: DeliveryResult,
}

/// Business inquiry endpoint.
///
/// Rejected submissions leave the store untouched and are never forwarded.
pub async fn submit_business_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<BusinessInquiry>, JsonRejection>,
) -> Result<Json<InquiryResponse>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "inquiry_body_rejected");
        rejection
    })?;

    let inquiry = match validate_inquiry(raw) {
        Ok(inquiry) => inquiry,
        Err(e) => {
            warn!(fields = ?e.fields(), "inquiry_validation_failed");
            return Err(e.into());
        }
    };

    let record = state.store.accept(inquiry).await;

    info!(
        reference_id = %record.reference_id(),
        business_name = %record.inquiry().business_name,
        business_type = %record.inquiry().business_type,
        "inquiry_received"
    );

    let webhook_delivery = state.partner_hub.forward(&record).await;

    if let Some(reason) = webhook_delivery.reason() {
        warn!(
            reference_id = %record.reference_id(),
            reason = %reason,
            "inquiry_stored_without_delivery"
        );
    }

    Ok(Json(InquiryResponse {
        reference_id: record.reference_id().to_string(),
        status: "received",
        webhook_delivery,
    }))
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Contact form endpoint. Logs the message; nothing is stored or forwarded.
pub async fn submit_contact(
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "contact_body_rejected");
        rejection
    })?;

    let contact = match validate_contact(raw) {
        Ok(contact) => contact,
        Err(e) => {
            warn!(fields = ?e.fields(), "contact_validation_failed");
            return Err(e.into());
        }
    };

    info!(
        full_name = %contact.full_name,
        email = %contact.email,
        subject = %contact.subject,
        message = %contact.message,
        "contact_request_received"
    );

    Ok(Json(ContactResponse {
        status: "success",
        message: "Message received",
    }))
}
