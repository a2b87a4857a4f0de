//! Personal detail validators: names, phone numbers and national IDs

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]{2,}$").expect("name pattern is valid"));

static NATIONAL_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]{4,}$").expect("national id pattern is valid"));

pub const NATIONAL_ID_MESSAGE: &str =
    "National ID must be at least 4 characters (letters and numbers allowed)";

/// Letters and whitespace only, at least 2 characters
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Validates a first or last name. `which` is the capitalised part
/// ("First" or "Last") used in the message.
pub fn validate_name(name: &str, which: &str) -> Result<(), String> {
    if name.is_empty() || is_valid_name(name) {
        Ok(())
    } else {
        Err(format!(
            "{} name must be at least 2 characters and contain only letters",
            which
        ))
    }
}

/// True when the value is non-empty and made of ASCII digits only
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_digits(value: &str, label: &str) -> Result<(), String> {
    if value.is_empty() || is_digits(value) {
        Ok(())
    } else {
        Err(format!("{} must contain only digits", label))
    }
}

pub fn is_valid_national_id(value: &str) -> bool {
    NATIONAL_ID_REGEX.is_match(value)
}

pub fn validate_national_id(value: &str) -> Result<(), String> {
    if value.is_empty() || is_valid_national_id(value) {
        Ok(())
    } else {
        Err(NATIONAL_ID_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Jane")]
    #[case("Jo")]
    #[case("Mary Ann")]
    #[case("de la Cruz")]
    fn test_valid_names(#[case] name: &str) {
        assert!(validate_name(name, "First").is_ok());
    }

    #[rstest]
    #[case("J")]
    #[case("Jane2")]
    #[case("O'Brien")]
    #[case("Anne-Marie")]
    #[case("Zoë")]
    fn test_invalid_names(#[case] name: &str) {
        let err = validate_name(name, "Last").unwrap_err();
        assert!(err.starts_with("Last name"));
    }

    #[test]
    fn test_digits() {
        assert!(validate_digits("", "Phone number").is_ok());
        assert!(validate_digits("0712345678", "Phone number").is_ok());
        assert_eq!(
            validate_digits("+44 7123", "Phone number").unwrap_err(),
            "Phone number must contain only digits"
        );
        assert!(!is_digits("١٢٣"));
    }

    #[test]
    fn test_national_id() {
        assert!(validate_national_id("").is_ok());
        assert!(validate_national_id("AB12").is_ok());
        assert!(validate_national_id("123456789V").is_ok());
        assert!(validate_national_id("AB1").is_err());
        assert!(validate_national_id("AB-1234").is_err());
    }
}
