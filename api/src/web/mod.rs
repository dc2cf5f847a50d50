//! Web server module.
//!
//! This module provides:
//! - Informational endpoints (`/api`, `/api/health`)
//! - Business inquiry intake with partner webhook forwarding
//! - Contact form intake (log only)

pub mod error;
pub mod handlers;
pub mod router;

pub use error::{ApiError, ErrorDetail, ErrorResponse};
pub use handlers::{
    health, root, submit_business_inquiry, submit_contact, AppState, ContactResponse,
    HealthResponse, InquiryResponse, WelcomeResponse,
};
pub use router::build_router;
