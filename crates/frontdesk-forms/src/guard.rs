// File: src/guard.rs
// Purpose: Duplicate-Submission Guard keyed by normalized email

use std::sync::Arc;

use frontdesk_validation_core::normalize_email;
use tracing::{debug, warn};

use crate::storage::MarkerStore;

/// Advisory, device-local guard against submitting the same form twice
/// for one email address. Not a substitute for server-side idempotency.
#[derive(Clone)]
pub struct DuplicateGuard {
    store: Arc<dyn MarkerStore>,
    key_prefix: String,
}

impl DuplicateGuard {
    pub fn new(store: Arc<dyn MarkerStore>, key_prefix: impl Into<String>) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
        }
    }

    pub fn marker_key(&self, email: &str) -> String {
        format!("{}{}", self.key_prefix, normalize_email(email))
    }

    /// Read failures count as "not submitted"
    pub async fn has_submitted(&self, email: &str) -> bool {
        if normalize_email(email).is_empty() {
            return false;
        }
        let key = self.marker_key(email);
        match self.store.get(&key).await {
            Ok(marker) => marker.unwrap_or(false),
            Err(e) => {
                warn!(key = %key, backend = self.store.name(), error = %e, "failed to read marker");
                false
            }
        }
    }

    /// Record a successful submission. Write failures are logged only.
    pub async fn mark_submitted(&self, email: &str) {
        if normalize_email(email).is_empty() {
            return;
        }
        let key = self.marker_key(email);
        match self.store.set(&key, true).await {
            Ok(()) => debug!(key = %key, "marked as submitted"),
            Err(e) => {
                warn!(key = %key, backend = self.store.name(), error = %e, "failed to write marker")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    struct BrokenStore;

    #[async_trait]
    impl MarkerStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<bool>> {
            Err(anyhow!("disk on fire"))
        }
        async fn set(&self, _key: &str, _value: bool) -> Result<()> {
            Err(anyhow!("disk on fire"))
        }
        async fn remove(&self, _key: &str) -> Result<()> {
            Err(anyhow!("disk on fire"))
        }
        async fn keys(&self) -> Result<Vec<String>> {
            Err(anyhow!("disk on fire"))
        }
        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_marker_is_keyed_by_normalized_email() {
        let store = Arc::new(MemoryStore::new());
        let guard = DuplicateGuard::new(store.clone(), "frontdesk:submitted:");

        assert!(!guard.has_submitted("jane@example.com").await);
        guard.mark_submitted(" Jane@Example.com ").await;

        assert!(guard.has_submitted("jane@example.com").await);
        assert!(guard.has_submitted("JANE@EXAMPLE.COM").await);
        assert!(!guard.has_submitted("john@example.com").await);
        assert_eq!(
            store.keys().await.unwrap(),
            vec!["frontdesk:submitted:jane@example.com".to_string()]
        );
    }

    #[tokio::test]
    async fn test_blank_email_never_marks() {
        let store = Arc::new(MemoryStore::new());
        let guard = DuplicateGuard::new(store.clone(), "p:");
        guard.mark_submitted("  ").await;
        assert_eq!(store.size().await, 0);
        assert!(!guard.has_submitted("").await);
    }

    #[tokio::test]
    async fn test_storage_failures_are_advisory() {
        let guard = DuplicateGuard::new(Arc::new(BrokenStore), "p:");
        guard.mark_submitted("jane@example.com").await;
        assert!(!guard.has_submitted("jane@example.com").await);
    }
}
