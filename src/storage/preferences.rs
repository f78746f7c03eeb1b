//! Persisted display preferences.

use crate::domain::Preferences;
use crate::storage::backend::KeyValueStore;
use crate::storage::PREFERENCES_KEY;

/// Holds the current [`Preferences`] and writes them through on every change.
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
    current: Preferences,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Loads preferences from `backend`.
    ///
    /// Unavailable storage, a missing key or unreadable JSON all yield
    /// [`Preferences::default`].
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let _span = tracing::debug_span!("preferences_load").entered();

        let current = match backend.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored preferences are malformed, using defaults");
                Preferences::default()
            }),
            Ok(None) => Preferences::default(),
            Err(e) => {
                tracing::warn!(error = %e, "preferences unavailable, using defaults");
                Preferences::default()
            }
        };

        tracing::debug!(dark_mode = current.dark_mode, font_size = current.font_size.label(), "preferences loaded");
        Self { backend, current }
    }

    #[must_use]
    pub const fn get(&self) -> Preferences {
        self.current
    }

    /// Replaces the preferences and persists them, best-effort.
    pub fn update(&mut self, preferences: Preferences) {
        self.current = preferences;
        self.persist();
    }

    /// Hands back the backend, e.g. to reload from it.
    #[must_use]
    pub fn into_backend(self) -> Box<dyn KeyValueStore> {
        self.backend
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.current) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize preferences");
                return;
            }
        };
        if let Err(e) = self.backend.set(PREFERENCES_KEY, &json) {
            tracing::warn!(error = %e, "failed to persist preferences");
        }
    }
}
