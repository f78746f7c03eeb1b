//! In-process storage backends.

use crate::domain::error::{Result, ViewerError};
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;

/// Keeps values in a map. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stands in for storage that the host has made unavailable.
///
/// Every call fails with [`ViewerError::Storage`], which exercises the
/// degrade-to-default paths of the stores built on top of it.
#[derive(Debug, Clone, Default)]
pub struct DisabledStore {
    reason: String,
}

impl DisabledStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> ViewerError {
        ViewerError::Storage(format!("storage unavailable: {}", self.reason))
    }
}

impl KeyValueStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(self.error())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_disabled_store_always_fails() {
        let mut store = DisabledStore::new("quota exceeded");
        assert!(matches!(store.get("k"), Err(ViewerError::Storage(_))));
        assert!(matches!(store.set("k", "v"), Err(ViewerError::Storage(_))));
    }
}
