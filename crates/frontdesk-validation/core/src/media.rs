//! Attachment media type validation

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// True for JPEG and PNG media types. Parameters after `;` are ignored.
pub fn is_allowed_image_type(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    IMAGE_TYPES.iter().any(|t| t.eq_ignore_ascii_case(essence))
}

/// Validates the declared media type of an attached file (empty is valid)
pub fn validate_image_type(media_type: &str, label: &str) -> Result<(), String> {
    if media_type.is_empty() || is_allowed_image_type(media_type) {
        Ok(())
    } else {
        Err(format!("{} must be a JPEG or PNG image", label))
    }
}

/// Guesses a media type from a file name extension
pub fn media_type_for_path(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
