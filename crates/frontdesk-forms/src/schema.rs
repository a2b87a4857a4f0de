// File: src/schema.rs
// Purpose: Field schema describing one form screen

use frontdesk_validation_core::Rule;

/// Input kind of a field. Only `File` accepts attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Time,
    TextArea,
    Password,
    File,
}

impl FieldKind {
    pub fn is_file(&self) -> bool {
        matches!(self, FieldKind::File)
    }

    /// HTML input type for this kind
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::TextArea => "textarea",
            FieldKind::Password => "password",
            FieldKind::File => "file",
        }
    }
}

/// How dates are written into outgoing payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWireFormat {
    /// `YYYY-MM-DD`, as typed
    #[default]
    Iso,
    /// `DD-MM-YYYY`
    DayFirst,
}

/// Declaration of a single form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub rule: Rule,
    pub required: bool,
    /// Filled from the query string only; user edits are refused
    pub locked: bool,
    /// Query parameter that pre-fills this field, when it differs from `name`
    pub query_param: Option<String>,
    /// Extra payload key carrying a copy of the value
    pub wire_alias: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            rule: Rule::Any,
            required: false,
            locked: false,
            query_param: None,
            wire_alias: None,
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn query_param(mut self, param: impl Into<String>) -> Self {
        self.query_param = Some(param.into());
        self
    }

    pub fn wire_alias(mut self, alias: impl Into<String>) -> Self {
        self.wire_alias = Some(alias.into());
        self
    }

    /// Query parameter name used for pre-fill
    pub fn param_name(&self) -> &str {
        self.query_param.as_deref().unwrap_or(&self.name)
    }
}

/// Complete description of one form screen
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
    /// Field whose value keys the duplicate-submission marker
    pub guard_field: Option<String>,
    /// Success message with `{field}` and `{serverMessage}` placeholders
    pub success_template: Option<String>,
    pub reset_on_success: bool,
    pub date_wire_format: DateWireFormat,
}

impl FormSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            guard_field: None,
            success_template: None,
            reset_on_success: false,
            date_wire_format: DateWireFormat::Iso,
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn guard_on(mut self, field: impl Into<String>) -> Self {
        self.guard_field = Some(field.into());
        self
    }

    pub fn success_message(mut self, template: impl Into<String>) -> Self {
        self.success_template = Some(template.into());
        self
    }

    pub fn reset_on_success(mut self) -> Self {
        self.reset_on_success = true;
        self
    }

    pub fn date_wire_format(mut self, format: DateWireFormat) -> Self {
        self.date_wire_format = format;
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields whose rule reads `name`
    pub fn dependents_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldSpec> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.rule.depends_on() == Some(name))
    }

    pub fn has_file_fields(&self) -> bool {
        self.fields.iter().any(|f| f.kind.is_file())
    }
}
