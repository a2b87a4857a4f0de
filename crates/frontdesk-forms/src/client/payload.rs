//! Request body encoding
//!
//! JSON when no field carries an attachment, multipart otherwise. Field
//! aliases and the schema's date format are applied in both encodings.

use frontdesk_validation_core::parse_date;
use serde_json::{Map, Value as JsonValue};

use crate::schema::{DateWireFormat, FieldKind, FieldSpec, FormSchema};
use crate::state::FormSnapshot;
use crate::value::{Attachment, FieldValue};

/// One multipart form part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub content: PartContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContent {
    Text(String),
    File(Attachment),
}

/// Encoded request body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(JsonValue),
    Multipart(Vec<Part>),
}

impl Payload {
    pub fn content_kind(&self) -> &'static str {
        match self {
            Payload::Json(_) => "application/json",
            Payload::Multipart(_) => "multipart/form-data",
        }
    }
}

/// Encode every schema field of the snapshot, in schema order
pub fn encode(schema: &FormSchema, snapshot: &FormSnapshot) -> Payload {
    if snapshot.has_attachment() {
        Payload::Multipart(encode_multipart(schema, snapshot))
    } else {
        Payload::Json(encode_json(schema, snapshot))
    }
}

fn encode_json(schema: &FormSchema, snapshot: &FormSnapshot) -> JsonValue {
    let mut body = Map::new();
    for spec in &schema.fields {
        let value = match snapshot.value(&spec.name) {
            Some(FieldValue::Text(text)) => JsonValue::String(wire_text(schema, spec, text)),
            _ if spec.kind.is_file() => JsonValue::Null,
            _ => JsonValue::String(String::new()),
        };
        for key in wire_keys(spec) {
            body.insert(key.to_string(), value.clone());
        }
    }
    JsonValue::Object(body)
}

fn encode_multipart(schema: &FormSchema, snapshot: &FormSnapshot) -> Vec<Part> {
    let mut parts = Vec::new();
    for spec in &schema.fields {
        let content = match snapshot.value(&spec.name) {
            Some(FieldValue::File(file)) => PartContent::File(file.clone()),
            Some(FieldValue::Text(text)) => PartContent::Text(wire_text(schema, spec, text)),
            _ => PartContent::Text(String::new()),
        };
        for key in wire_keys(spec) {
            parts.push(Part {
                name: key.to_string(),
                content: content.clone(),
            });
        }
    }
    parts
}

fn wire_keys(spec: &FieldSpec) -> impl Iterator<Item = &str> {
    std::iter::once(spec.name.as_str()).chain(spec.wire_alias.as_deref())
}

fn wire_text(schema: &FormSchema, spec: &FieldSpec, text: &str) -> String {
    match (spec.kind, schema.date_wire_format) {
        (FieldKind::Date, DateWireFormat::DayFirst) => match parse_date(text) {
            Some(date) => date.format("%d-%m-%Y").to_string(),
            None => text.to_string(),
        },
        _ => text.to_string(),
    }
}
