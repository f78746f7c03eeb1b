//! JSON file storage backend.
//!
//! Each key lives in its own file, `<dir>/<key>.json`, so the bookmark and
//! preference stores can each own a backend over the same directory without
//! overwriting one another. Writes go to a temporary file that is then renamed
//! over the target, so a crash never leaves a half-written value behind.

use crate::domain::error::{Result, ViewerError};
use crate::storage::backend::KeyValueStore;
use std::path::PathBuf;

/// Directory of JSON files, one per key.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by a single store on the
/// plugin thread.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use refdoc::storage::JsonFileStore;
    ///
    /// let store = JsonFileStore::new("/tmp/refdoc")?;
    /// # Ok::<(), refdoc::domain::ViewerError>(())
    /// ```
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        tracing::debug!(dir = ?dir, "initializing JSON file store");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ViewerError::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_store_get", key = %key).entered();

        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "value loaded");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no stored value");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key, bytes = value.len()).entered();

        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("value saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert_eq!(store.get("bookmarks").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        store.set("bookmarks", r#"[{"id":"0-0"}]"#).unwrap();
        assert_eq!(
            store.get("bookmarks").unwrap().as_deref(),
            Some(r#"[{"id":"0-0"}]"#)
        );
        assert!(dir.path().join("bookmarks.json").exists());
        assert!(!dir.path().join("bookmarks.json.tmp").exists());
    }

    #[test]
    fn test_keys_do_not_clobber_each_other() {
        let dir = tempfile::tempdir().unwrap();
        let mut bookmarks = JsonFileStore::new(dir.path()).unwrap();
        let mut preferences = JsonFileStore::new(dir.path()).unwrap();
        bookmarks.set("bookmarks", "[]").unwrap();
        preferences.set("preferences", "{}").unwrap();
        assert_eq!(bookmarks.get("bookmarks").unwrap().as_deref(), Some("[]"));
        assert_eq!(bookmarks.get("preferences").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = JsonFileStore::new(&nested).unwrap();
        store.set("preferences", "{}").unwrap();
        assert!(nested.join("preferences.json").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        assert!(matches!(store.set("../escape", "x"), Err(ViewerError::Storage(_))));
        assert!(matches!(store.get(""), Err(ViewerError::Storage(_))));
    }
}
