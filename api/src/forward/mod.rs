//! Partner webhook forwarding.
//!
//! This module provides:
//! - `DeliveryResult`: per-submission outcome returned to the caller
//! - `PartnerHub`: the forwarder that POSTs accepted inquiries

pub mod partner_hub;
pub mod types;

pub use partner_hub::PartnerHub;
pub use types::{DeliveryError, DeliveryResult, WEBHOOK_NOT_CONFIGURED};
