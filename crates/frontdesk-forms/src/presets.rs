// File: src/presets.rs
// Purpose: Built-in schemas for the admin screens

use crate::schema::{DateWireFormat, FieldKind, FieldSpec, FormSchema};
use frontdesk_validation_core::{NamePart, Rule};

pub const APPOINTMENT: &str = "appointment";
pub const VISITOR: &str = "visitor";
pub const PERSONAL_INFO: &str = "personal-info";
pub const REGISTER: &str = "register";

/// Names accepted by [`by_name`]
pub const ALL: &[&str] = &[APPOINTMENT, VISITOR, PERSONAL_INFO, REGISTER];

fn first_name() -> FieldSpec {
    FieldSpec::new("firstName", "First Name", FieldKind::Text).rule(Rule::PersonName {
        part: NamePart::First,
    })
}

fn last_name() -> FieldSpec {
    FieldSpec::new("lastName", "Last Name", FieldKind::Text).rule(Rule::PersonName {
        part: NamePart::Last,
    })
}

fn date() -> FieldSpec {
    FieldSpec::new("date", "Date", FieldKind::Date).rule(Rule::NotPastDate)
}

fn time_after_date(name: &str, label: &str) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Time).rule(Rule::TimeAfterNow {
        date_field: "date".to_string(),
    })
}

/// Staff-facing appointment scheduling form (JSON)
pub fn appointment() -> FormSchema {
    FormSchema::new(APPOINTMENT)
        .field(first_name().required())
        .field(last_name().required())
        .field(date().required())
        .field(time_after_date("allocatedTime", "Allocated Time").required())
        .field(
            FieldSpec::new("visitorEmail", "Visitor Email", FieldKind::Email)
                .rule(Rule::Email)
                .required(),
        )
        .guard_on("visitorEmail")
        .success_message(
            "Appointment for {firstName} {lastName} scheduled successfully! \
             Email sent to {visitorEmail}. {serverMessage}",
        )
        .reset_on_success()
}

/// Visitor intake form opened from the appointment email link (multipart).
///
/// Identity and slot fields arrive through the query string and cannot be
/// edited; the visitor completes the rest.
pub fn visitor() -> FormSchema {
    FormSchema::new(VISITOR)
        .field(first_name().locked())
        .field(last_name().locked())
        .field(date().locked())
        .field(time_after_date("allocatedTime", "Allocated Time").query_param("time").locked())
        .field(
            FieldSpec::new("email", "Email", FieldKind::Email)
                .rule(Rule::Email)
                .locked(),
        )
        .field(
            FieldSpec::new("nationalId", "National ID", FieldKind::Text)
                .rule(Rule::NationalId)
                .required(),
        )
        .field(
            FieldSpec::new("photo", "Photo", FieldKind::File)
                .rule(Rule::ImageFile {
                    label: "Photo".to_string(),
                })
                .required(),
        )
        .field(
            FieldSpec::new("mobile", "Mobile Number", FieldKind::Tel)
                .rule(Rule::Digits {
                    label: "Mobile number".to_string(),
                })
                .required(),
        )
        .field(FieldSpec::new("personalDetails", "Personal Details", FieldKind::TextArea).required())
        .field(FieldSpec::new("note", "Note", FieldKind::TextArea).required())
        .guard_on("email")
        .success_message("Visitor details for {firstName} {lastName} submitted successfully! {serverMessage}")
}

/// Personal information capture (JSON, day-first dates)
pub fn personal_info() -> FormSchema {
    FormSchema::new(PERSONAL_INFO)
        .field(first_name())
        .field(last_name())
        .field(
            FieldSpec::new("phone", "Phone Number", FieldKind::Tel)
                .rule(Rule::Digits {
                    label: "Phone number".to_string(),
                })
                .wire_alias("phoneNumber"),
        )
        .field(FieldSpec::new("nationalId", "National ID", FieldKind::Text).rule(Rule::NationalId))
        .field(FieldSpec::new("email", "Email ID", FieldKind::Email).rule(Rule::Email))
        .field(FieldSpec::new("allocationTime", "Allocation Time", FieldKind::Time).query_param("time"))
        .field(date())
        .date_wire_format(DateWireFormat::DayFirst)
        .success_message("Visitor data successfully submitted! {serverMessage}")
        .reset_on_success()
}

/// Account registration
pub fn register() -> FormSchema {
    FormSchema::new(REGISTER)
        .field(FieldSpec::new("name", "Name", FieldKind::Text).required())
        .field(FieldSpec::new("email", "Email", FieldKind::Email).required())
        .field(FieldSpec::new("phone", "Phone", FieldKind::Tel).required())
        .field(FieldSpec::new("address", "Address", FieldKind::Text).required())
        .field(FieldSpec::new("password", "Password", FieldKind::Password).required())
        .success_message("Your account has been created successfully. {serverMessage}")
        .reset_on_success()
}

/// Look a preset up by name
pub fn by_name(name: &str) -> Option<FormSchema> {
    match name {
        APPOINTMENT => Some(appointment()),
        VISITOR => Some(visitor()),
        PERSONAL_INFO | "personal_info" => Some(personal_info()),
        REGISTER => Some(register()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_resolves() {
        for name in ALL {
            let schema = by_name(name).unwrap();
            assert_eq!(&schema.name, name);
            assert!(!schema.fields.is_empty());
        }
        assert!(by_name("login").is_none());
    }

    #[test]
    fn test_guard_fields_exist() {
        for name in ALL {
            let schema = by_name(name).unwrap();
            if let Some(guard) = &schema.guard_field {
                assert!(schema.get(guard).is_some(), "{} guards on {}", name, guard);
            }
        }
    }

    #[test]
    fn test_visitor_locks_prefilled_fields() {
        let schema = visitor();
        let locked: Vec<_> = schema
            .fields
            .iter()
            .filter(|f| f.locked)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(locked, vec!["firstName", "lastName", "date", "allocatedTime", "email"]);
        assert!(schema.fields.iter().filter(|f| f.locked).all(|f| !f.required));
        assert!(schema.has_file_fields());
    }
}
