//! Field rules and the single entry point that evaluates them

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::{email, media, person, schedule};

/// Which half of a person's name a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamePart {
    First,
    Last,
}

impl NamePart {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamePart::First => "First",
            NamePart::Last => "Last",
        }
    }
}

/// Content rule attached to a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Rule {
    /// No content constraint
    Any,
    PersonName {
        part: NamePart,
    },
    Email,
    Digits {
        label: String,
    },
    NationalId,
    /// Today or later
    NotPastDate,
    /// Later than now when the date in `date_field` is today
    #[serde(rename_all = "camelCase")]
    TimeAfterNow {
        date_field: String,
    },
    /// Value is the attachment's media type
    ImageFile {
        label: String,
    },
}

impl Rule {
    /// Name of the other field this rule reads, if any
    pub fn depends_on(&self) -> Option<&str> {
        match self {
            Rule::TimeAfterNow { date_field } => Some(date_field.as_str()),
            _ => None,
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::Any
    }
}

/// Read-only view of the other fields of a form
pub trait Snapshot {
    fn get(&self, field: &str) -> Option<&str>;
}

impl Snapshot for HashMap<String, String> {
    fn get(&self, field: &str) -> Option<&str> {
        HashMap::get(self, field).map(String::as_str)
    }
}

impl Snapshot for BTreeMap<String, String> {
    fn get(&self, field: &str) -> Option<&str> {
        BTreeMap::get(self, field).map(String::as_str)
    }
}

/// Evaluates one rule against one value.
///
/// Empty values always pass; emptiness of required fields is reported by
/// the full-form pass through [`required_message`].
pub fn check(
    rule: &Rule,
    value: &str,
    snapshot: &dyn Snapshot,
    now: NaiveDateTime,
) -> Result<(), String> {
    match rule {
        Rule::Any => Ok(()),
        Rule::PersonName { part } => person::validate_name(value, part.as_str()),
        Rule::Email => email::validate_email(value),
        Rule::Digits { label } => person::validate_digits(value, label),
        Rule::NationalId => person::validate_national_id(value),
        Rule::NotPastDate => schedule::validate_not_past_date(value, now),
        Rule::TimeAfterNow { date_field } => {
            schedule::validate_time_after_now(value, snapshot.get(date_field), now)
        }
        Rule::ImageFile { label } => media::validate_image_type(value, label),
    }
}

pub fn required_message(label: &str) -> String {
    format!("{} is required", label)
}
