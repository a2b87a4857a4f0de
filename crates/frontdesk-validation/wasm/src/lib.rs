//! Frontdesk Validation WASM
//!
//! WebAssembly bindings for the frontdesk field rules.
//! Provides real-time client-side validation using the same logic as the
//! native form pipeline.

use chrono::Local;
use frontdesk_validation_core as core;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Validation rules for a single field
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldRules {
    /// Content rule, e.g. `{ "type": "personName", "part": "first" }`
    #[serde(default)]
    pub rule: core::Rule,

    /// Label used in the required message (defaults to the field name)
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// Custom message replacing the rule's own
    #[serde(default)]
    pub message: Option<String>,
}

/// Validate a single field value
///
/// # Arguments
/// * `field_name` - Name of the field being validated
/// * `value` - The value to validate (media type for file inputs)
/// * `rules` - JavaScript object with validation rules
/// * `snapshot` - JavaScript object with the other fields' current values
///
/// # Returns
/// Array of validation errors (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateField('allocatedTime', '09:30', {
///     rule: { type: 'timeAfterNow', dateField: 'date' },
///     required: true
/// }, { date: '2026-10-18' });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(
    field_name: &str,
    value: &str,
    rules: JsValue,
    snapshot: JsValue,
) -> Result<JsValue, JsValue> {
    let rules: FieldRules = serde_wasm_bindgen::from_value(rules).map_err(|e| {
        web_sys::console::warn_1(&JsValue::from_str(&format!("{}: bad rules", field_name)));
        JsValue::from_str(&format!("Failed to parse rules: {}", e))
    })?;

    let snapshot: HashMap<String, String> = if snapshot.is_undefined() || snapshot.is_null() {
        HashMap::new()
    } else {
        serde_wasm_bindgen::from_value(snapshot)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse snapshot: {}", e)))?
    };

    let errors = collect_errors(field_name, value, &rules, &snapshot);
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

fn collect_errors(
    field_name: &str,
    value: &str,
    rules: &FieldRules,
    snapshot: &HashMap<String, String>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Required validation
    if rules.required && value.trim().is_empty() {
        let label = rules.label.as_deref().unwrap_or(field_name);
        errors.push(ValidationError {
            field: field_name.to_string(),
            message: rules
                .message
                .clone()
                .unwrap_or_else(|| core::required_message(label)),
        });
        return errors;
    }

    let now = Local::now().naive_local();
    if let Err(msg) = core::check(&rules.rule, value, snapshot, now) {
        errors.push(ValidationError {
            field: field_name.to_string(),
            message: rules.message.clone().unwrap_or(msg),
        });
    }

    errors
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Reduce `10:00 AM` / `10:00:00` to `10:00`
#[wasm_bindgen(js_name = normalizeTime)]
pub fn normalize_time_js(raw: &str) -> String {
    core::normalize_time(raw)
}

/// Storage key for the duplicate-submission marker of an email
#[wasm_bindgen(js_name = normalizeEmail)]
pub fn normalize_email_js(email: &str) -> String {
    core::normalize_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("jane@example.com"));
        assert!(!is_valid_email_js("not-an-email"));
    }

    #[wasm_bindgen_test]
    fn test_normalize_time() {
        assert_eq!(normalize_time_js("10:00 AM"), "10:00");
        assert_eq!(normalize_time_js("10:00:00"), "10:00");
    }

    #[wasm_bindgen_test]
    fn test_required_short_circuits() {
        let rules = FieldRules {
            rule: core::Rule::Email,
            label: Some("Visitor Email".to_string()),
            required: true,
            message: None,
        };
        let errors = collect_errors("visitorEmail", "", &rules, &HashMap::new());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Visitor Email is required");
    }

    #[wasm_bindgen_test]
    fn test_rule_error() {
        let rules = FieldRules {
            rule: core::Rule::NationalId,
            ..FieldRules::default()
        };
        let errors = collect_errors("nationalId", "AB", &rules, &HashMap::new());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("National ID"));
    }
}
