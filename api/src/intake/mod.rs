//! Form intake: submission types, validation, and the inquiry store.
//!
//! ```text
//! JSON body → validate_*() → normalized form → InquiryStore::accept() → InquiryRecord
//! ```

pub mod store;
pub mod types;
pub mod validate;

pub use store::InquiryStore;
pub use types::{BusinessInquiry, ContactRequest, InquiryRecord};
pub use validate::{
    is_valid_email, validate_contact, validate_inquiry, FieldError, ValidationError,
};
