//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@label.label.tld, TLD of 2-4 characters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
        .expect("email pattern is valid")
});

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Validates email format
///
/// Accepts word characters, dots and hyphens before the `@`, one or more
/// dot-separated domain labels, and a 2 to 4 character top-level label.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Email validator for a single field value (empty is valid)
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err(EMAIL_MESSAGE.to_string())
    }
}

/// Normalizes an email address for use as a lookup key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
