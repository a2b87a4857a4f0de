use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use frontdesk_forms::Attachment;
use frontdesk_validation_core::media_type_for_path;

/// Field values given on the command line
#[derive(Args, Debug, Default, Clone)]
pub struct FormInput {
    /// Set a field: NAME=VALUE (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_pair)]
    pub values: Vec<(String, String)>,

    /// Attach a file to a field: NAME=PATH (repeatable)
    #[arg(long = "file", value_name = "NAME=PATH", value_parser = parse_pair)]
    pub files: Vec<(String, String)>,

    /// Pre-fill from a query string or URL, as a link would
    #[arg(short, long)]
    pub query: Option<String>,
}

impl FormInput {
    /// Read every `--file` from disk
    pub fn attachments(&self) -> Result<Vec<(String, Attachment)>> {
        self.files
            .iter()
            .map(|(name, path)| Ok((name.clone(), read_attachment(Path::new(path))?)))
            .collect()
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got `{}`", raw)),
    }
}

fn read_attachment(path: &Path) -> Result<Attachment> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let media_type = media_type_for_path(&file_name);
    Ok(Attachment::new(file_name, media_type, bytes))
}
