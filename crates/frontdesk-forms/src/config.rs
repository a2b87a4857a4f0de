// File: src/config.rs
// Purpose: Configuration parsing from frontdesk.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::presets;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Submission endpoint per form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_appointment_endpoint")]
    pub appointment: String,

    #[serde(default = "default_visitor_endpoint")]
    pub visitor: String,

    #[serde(default = "default_personal_info_endpoint")]
    pub personal_info: String,

    #[serde(default = "default_register_endpoint")]
    pub register: String,
}

/// Which marker store backs the duplicate-submission guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Lost when the process exits
    Memory,
    /// One file per marker under `path`
    Filesystem,
}

/// Marker storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,

    #[serde(default = "default_storage_path")]
    pub path: PathBuf,

    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

// Default values
fn default_appointment_endpoint() -> String {
    "http://localhost:3001/appointment/create".to_string()
}

fn default_visitor_endpoint() -> String {
    "http://localhost:3000/visitor".to_string()
}

fn default_personal_info_endpoint() -> String {
    "http://localhost:3001/visitors".to_string()
}

fn default_register_endpoint() -> String {
    "http://localhost:3001/items".to_string()
}

fn default_backend() -> StorageBackend {
    StorageBackend::Filesystem
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".frontdesk/markers")
}

fn default_key_prefix() -> String {
    "frontdesk:submitted:".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            appointment: default_appointment_endpoint(),
            visitor: default_visitor_endpoint(),
            personal_info: default_personal_info_endpoint(),
            register: default_register_endpoint(),
        }
    }
}

impl EndpointConfig {
    /// Endpoint for a preset form name
    pub fn for_form(&self, form: &str) -> Option<&str> {
        match form {
            presets::APPOINTMENT => Some(self.appointment.as_str()),
            presets::VISITOR => Some(self.visitor.as_str()),
            presets::PERSONAL_INFO | "personal_info" => Some(self.personal_info.as_str()),
            presets::REGISTER => Some(self.register.as_str()),
            _ => None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_storage_path(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./frontdesk.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("frontdesk.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoints.appointment, "http://localhost:3001/appointment/create");
        assert_eq!(config.storage.backend, StorageBackend::Filesystem);
        assert_eq!(config.storage.key_prefix, "frontdesk:submitted:");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.endpoints.visitor, "http://localhost:3000/visitor");
        assert_eq!(config.storage.path, PathBuf::from(".frontdesk/markers"));
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [endpoints]
            appointment = "https://api.example.com/appointment/create"

            [storage]
            backend = "memory"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.endpoints.for_form("appointment"),
            Some("https://api.example.com/appointment/create")
        );
        assert_eq!(config.endpoints.for_form("register"), Some("http://localhost:3001/items"));
        assert_eq!(config.endpoints.for_form("login"), None);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("/definitely/not/here/frontdesk.toml").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Filesystem);
    }
}
