// File: src/value.rs
// Purpose: Field value types held by a form

const UNTYPED_MEDIA: &str = "application/octet-stream";

/// A file picked for a file input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    /// Declared media type, e.g. `image/jpeg`
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Current value of one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    File(Attachment),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::File(_) => false,
        }
    }

    /// Text form seen by validators: the text itself, or the media type of
    /// an attachment. An attachment without a declared type reads as
    /// `application/octet-stream`, never as empty.
    pub fn as_validation_input(&self) -> &str {
        match self {
            FieldValue::Empty => "",
            FieldValue::Text(s) => s,
            FieldValue::File(file) if file.media_type.trim().is_empty() => UNTYPED_MEDIA,
            FieldValue::File(file) => &file.media_type,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_attachment(&self) -> Option<&Attachment> {
        match self {
            FieldValue::File(file) => Some(file),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Attachment> for FieldValue {
    fn from(file: Attachment) -> Self {
        FieldValue::File(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::Empty.is_empty());
        assert!(FieldValue::from("   ").is_empty());
        assert!(!FieldValue::from("Jane").is_empty());
        assert!(!FieldValue::from(Attachment::new("a.png", "image/png", vec![])).is_empty());
    }

    #[test]
    fn test_validation_input_for_file_is_media_type() {
        let value = FieldValue::from(Attachment::new("me.jpg", "image/jpeg", vec![1, 2]));
        assert_eq!(value.as_validation_input(), "image/jpeg");
        assert!(value.as_text().is_none());
    }
}
