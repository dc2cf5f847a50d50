//! Field validation for submitted forms.
//!
//! Each rule is a plain function returning the trimmed value or a
//! [`FieldError`]. The form-level validators run every rule, collect all
//! failures, and only hand back a normalized value when none failed.

use serde::Serialize;
use thiserror::Error;

use super::types::{BusinessInquiry, ContactRequest};

/// Minimum trimmed length for free-text fields.
pub const MIN_TEXT_LEN: usize = 2;

/// Minimum trimmed length for phone numbers.
pub const MIN_PHONE_LEN: usize = 5;

const TOO_SHORT: &str = "Field is too short.";
const BAD_PHONE: &str = "Enter a valid phone number.";
const BAD_EMAIL: &str = "value is not a valid email address";

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field, e.g. `ownerName`
    pub field: &'static str,
    pub message: &'static str,
}

/// Every field that failed validation for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission failed validation on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wire names of the rejected fields, in check order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

/// Free-text field: at least two characters after trimming.
pub fn validate_text(field: &'static str, value: &str) -> Result<String, FieldError> {
    min_length(field, value, MIN_TEXT_LEN, TOO_SHORT)
}

/// Phone number: at least five characters after trimming. No canonicalization.
pub fn validate_phone(field: &'static str, value: &str) -> Result<String, FieldError> {
    min_length(field, value, MIN_PHONE_LEN, BAD_PHONE)
}

/// Email address: trimmed, then checked with [`is_valid_email`].
pub fn validate_email(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if is_valid_email(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(FieldError {
            field,
            message: BAD_EMAIL,
        })
    }
}

fn min_length(
    field: &'static str,
    value: &str,
    min: usize,
    message: &'static str,
) -> Result<String, FieldError> {
    let trimmed = value.trim();
    // Count characters, not bytes.
    if trimmed.chars().count() < min {
        return Err(FieldError { field, message });
    }
    Ok(trimmed.to_string())
}

/// Syntactic email check: `local@domain` with a dotted, DNS-shaped domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= 64
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local.chars().all(is_atext)
}

/// RFC 5322 atext plus the dot separator. Non-ASCII letters are allowed for
/// internationalized addresses.
fn is_atext(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '.' || "!#$%&'*+-/=?^_`{|}~".contains(c)
    } else {
        !c.is_whitespace() && !c.is_control()
    }
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    // A numeric TLD would make this an IP-ish string, not a domain.
    let tld_ok = labels
        .last()
        .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()));

    labels_ok && tld_ok
}

/// Collects field failures across a whole form.
#[derive(Default)]
struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    fn take(&mut self, result: Result<String, FieldError>) -> String {
        result.unwrap_or_else(|e| {
            self.errors.push(e);
            String::new()
        })
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Validate and normalize a business inquiry.
///
/// Optional fields are trimmed but carry no rules.
pub fn validate_inquiry(raw: BusinessInquiry) -> Result<BusinessInquiry, ValidationError> {
    let mut checks = Checks::default();

    let inquiry = BusinessInquiry {
        owner_name: checks.take(validate_text("ownerName", &raw.owner_name)),
        email: checks.take(validate_email("email", &raw.email)),
        phone: checks.take(validate_phone("phone", &raw.phone)),
        business_name: checks.take(validate_text("businessName", &raw.business_name)),
        business_type: checks.take(validate_text("businessType", &raw.business_type)),
        locations: raw.locations.map(|s| s.trim().to_string()),
        website: raw.website.map(|s| s.trim().to_string()),
        message: checks.take(validate_text("message", &raw.message)),
    };

    checks.finish(inquiry)
}

/// Validate and normalize a contact request.
pub fn validate_contact(raw: ContactRequest) -> Result<ContactRequest, ValidationError> {
    let mut checks = Checks::default();

    let contact = ContactRequest {
        full_name: checks.take(validate_text("fullName", &raw.full_name)),
        email: checks.take(validate_email("email", &raw.email)),
        subject: checks.take(validate_text("subject", &raw.subject)),
        message: checks.take(validate_text("message", &raw.message)),
    };

    checks.finish(contact)
}
