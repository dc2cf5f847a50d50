//! Otogo API - partner inquiry and contact intake.
//!
//! This library provides the modules behind the `otogo-api` binary:
//! - `intake`: submission types, validation, and the in-memory inquiry store
//! - `forward`: best-effort delivery of accepted inquiries to a partner webhook
//! - `web`: axum handlers and router
//!
//! ## Flow
//!
//! ```text
//! POST /api/business-inquiries → validate → InquiryStore → PartnerHub → response
//! POST /api/contact            → validate → log          → response
//! ```

pub mod config;
pub mod forward;
pub mod intake;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use forward::{DeliveryResult, PartnerHub};
pub use intake::{BusinessInquiry, ContactRequest, InquiryRecord, InquiryStore};
pub use web::{build_router, AppState};
