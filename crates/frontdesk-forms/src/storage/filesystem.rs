//! Filesystem marker store

use crate::storage::MarkerStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Filesystem storage backend
///
/// Stores each marker as a small JSON file in one directory.
/// Persistent across restarts, scoped to the machine it runs on.
#[derive(Clone, Debug)]
pub struct FilesystemStore {
    dir: PathBuf,
}

impl FilesystemStore {
    /// Open a store, creating the directory if needed
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create marker directory: {:?}", dir))?;
        Ok(Self { dir })
    }

    /// Keys are percent-encoded so that any email maps to a safe file name
    fn key_to_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", urlencoding::encode(key)))
    }
}

#[async_trait]
impl MarkerStore for FilesystemStore {
    async fn get(&self, key: &str) -> Result<Option<bool>> {
        let path = self.key_to_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .context("Failed to read marker file")?;
        let value: bool =
            serde_json::from_str(&content).context("Failed to deserialize marker")?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: bool) -> Result<()> {
        let json = serde_json::to_string(&value).context("Failed to serialize marker")?;
        fs::write(self.key_to_path(key), json)
            .await
            .context("Failed to write marker file")?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .context("Failed to delete marker file")?;
        }
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut entries = fs::read_dir(&self.dir)
            .await
            .context("Failed to read marker directory")?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Ok(key) = urlencoding::decode(stem) {
                    keys.push(key.into_owned());
                }
            }
        }

        Ok(keys)
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_filesystem_store_basic() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(temp_dir.path()).await.unwrap();
        let key = "frontdesk:submitted:jane@example.com";

        assert_eq!(store.get(key).await.unwrap(), None);
        store.set(key, true).await.unwrap();
        assert_eq!(store.get(key).await.unwrap(), Some(true));
        assert_eq!(store.keys().await.unwrap(), vec![key.to_string()]);

        store.remove(key).await.unwrap();
        assert_eq!(store.get(key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_filesystem_store_persistence() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = FilesystemStore::new(temp_dir.path()).await.unwrap();
            store.set("persistent/key", true).await.unwrap();
        }

        // New instance, simulating a restart
        {
            let store = FilesystemStore::new(temp_dir.path()).await.unwrap();
            assert_eq!(store.get("persistent/key").await.unwrap(), Some(true));
        }
    }
}
