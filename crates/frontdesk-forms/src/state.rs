// File: src/state.rs
// Purpose: Form State Container - values, per-field errors and submission status

use std::collections::BTreeMap;
use std::sync::Arc;

use frontdesk_validation_core::{check, required_message, Snapshot};
use thiserror::Error;
use tracing::debug;

use crate::client::SubmissionResult;
use crate::clock::{Clock, SystemClock};
use crate::schema::{FieldSpec, FormSchema};
use crate::value::FieldValue;

/// Field name to error message. A missing entry means the field is valid.
pub type ErrorMap = BTreeMap<String, String>;

/// Misuse of the form API (not a validation failure)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` expects {expected} input")]
    KindMismatch { field: String, expected: &'static str },

    #[error("field `{0}` is read-only")]
    Locked(String),
}

/// Values of every field of a form at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<String, FieldValue>,
}

impl FormSnapshot {
    fn for_schema(schema: &FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| (f.name.clone(), FieldValue::Empty))
            .collect();
        Self { values }
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text of a field, `""` for empty, file or unknown fields
    pub fn text(&self, name: &str) -> &str {
        self.values
            .get(name)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    /// True when at least one field holds an attachment
    pub fn has_attachment(&self) -> bool {
        self.values
            .values()
            .any(|v| matches!(v, FieldValue::File(_)))
    }
}

impl Snapshot for FormSnapshot {
    fn get(&self, field: &str) -> Option<&str> {
        match self.values.get(field)? {
            FieldValue::Empty => None,
            value => Some(value.as_validation_input()),
        }
    }
}

/// State of one mounted form
pub struct FormState {
    schema: FormSchema,
    values: FormSnapshot,
    errors: ErrorMap,
    submitting: bool,
    result: Option<SubmissionResult>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("schema", &self.schema.name)
            .field("errors", &self.errors)
            .field("submitting", &self.submitting)
            .field("result", &self.result)
            .finish()
    }
}

impl FormState {
    pub fn new(schema: FormSchema, clock: Arc<dyn Clock>) -> Self {
        let values = FormSnapshot::for_schema(&schema);
        Self {
            schema,
            values,
            errors: ErrorMap::new(),
            submitting: false,
            result: None,
            clock,
        }
    }

    /// Form state reading the local system clock
    pub fn with_system_clock(schema: FormSchema) -> Self {
        Self::new(schema, Arc::new(SystemClock))
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Update a field from user input and re-validate it, plus any field
    /// whose rule reads it and already has a value.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let spec = self.spec(name)?;
        if spec.locked {
            return Err(FormError::Locked(name.to_string()));
        }
        self.store(name, value.into())?;
        self.revalidate(name);

        let dependents: Vec<String> = self
            .schema
            .dependents_of(name)
            .filter(|dep| !self.values.value(&dep.name).map_or(true, FieldValue::is_empty))
            .map(|dep| dep.name.clone())
            .collect();
        for dep in dependents {
            debug!(field = %dep, trigger = %name, "re-validating dependent field");
            self.revalidate(&dep);
        }
        Ok(())
    }

    /// Seed values at mount time. Locked fields are writable here; unknown
    /// names and file fields are skipped.
    pub fn prefill<I, K, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in values {
            let name = name.as_ref();
            let value = value.into();
            match self.spec(name) {
                Ok(spec) if !spec.kind.is_file() => {}
                _ => continue,
            }
            let empty = value.trim().is_empty();
            if self.store(name, FieldValue::Text(value)).is_ok() && !empty {
                self.revalidate(name);
            }
        }
    }

    /// Full-form pass: every content rule plus the required check.
    /// Replaces the whole error map and returns whether the form is clean.
    pub fn validate_all(&mut self) -> bool {
        let now = self.clock.now();
        let mut errors = ErrorMap::new();

        for spec in &self.schema.fields {
            let value = self.values.value(&spec.name).cloned().unwrap_or_default();
            if spec.required && value.is_empty() {
                errors.insert(spec.name.clone(), required_message(&spec.label));
                continue;
            }
            if let Err(message) = check(&spec.rule, value.as_validation_input(), &self.values, now) {
                errors.insert(spec.name.clone(), message);
            }
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Clear all values and errors
    pub fn reset(&mut self) {
        self.values = FormSnapshot::for_schema(&self.schema);
        self.errors.clear();
    }

    /// Mark a submission as started. Returns `false` when one is already
    /// in flight, leaving the state untouched.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.result = None;
        true
    }

    pub fn end_submit(&mut self, result: SubmissionResult) {
        self.submitting = false;
        self.result = Some(result);
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.value(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.values.text(name)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// Cloned values for the submission client
    pub fn snapshot(&self) -> FormSnapshot {
        self.values.clone()
    }

    fn spec(&self, name: &str) -> Result<&FieldSpec, FormError> {
        self.schema
            .get(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn store(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let spec = self.spec(name)?;
        let fits = match (&value, spec.kind.is_file()) {
            (FieldValue::Empty, _) => true,
            (FieldValue::File(_), is_file) => is_file,
            (FieldValue::Text(_), is_file) => !is_file,
        };
        if !fits {
            let expected = if spec.kind.is_file() { "file" } else { "text" };
            return Err(FormError::KindMismatch {
                field: name.to_string(),
                expected,
            });
        }
        self.values.values.insert(name.to_string(), value);
        Ok(())
    }

    fn revalidate(&mut self, name: &str) {
        let Some(spec) = self.schema.get(name) else {
            return;
        };
        let value = self.values.value(name).cloned().unwrap_or_default();
        match check(&spec.rule, value.as_validation_input(), &self.values, self.clock.now()) {
            Ok(()) => {
                self.errors.remove(name);
            }
            Err(message) => {
                self.errors.insert(name.to_string(), message);
            }
        }
    }
}
