pub mod schema;
pub mod submit;
pub mod validate;

use anyhow::{Context, Result};
use frontdesk_forms::{presets, FormSchema};

/// Preset schema by name, with the known names in the error
pub fn lookup(form: &str) -> Result<FormSchema> {
    presets::by_name(form).with_context(|| {
        format!(
            "Unknown form '{}'. Available forms: {}",
            form,
            presets::ALL.join(", ")
        )
    })
}
