//! Settings Store (Use Case)
//!
//! Dispatch settings and theme preference backed by a [`KeyValueStore`].
//! Reads never fail: a missing, unreadable or corrupt entry yields the
//! default. Writes are best effort: the in-memory value is always updated
//! and a failed write is only logged.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{DispatchSettings, SettingsPatch, Theme};
use crate::ports::KeyValueStore;

pub const SETTINGS_KEY: &str = "promptcraft_settings";
pub const THEME_KEY: &str = "theme";

pub struct SettingsStore<S: KeyValueStore> {
    backend: S,
    settings: DispatchSettings,
    theme: Theme,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Load persisted values from `backend`, falling back to defaults
    pub fn load(backend: S) -> Self {
        let settings = read_or_default(&backend, SETTINGS_KEY);
        let theme = read_or_default(&backend, THEME_KEY);
        Self {
            backend,
            settings,
            theme,
        }
    }

    pub fn get(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Merge `patch` into the current settings and persist them
    pub fn set(&mut self, patch: SettingsPatch) {
        patch.apply(&mut self.settings);
        let settings = self.settings.clone();
        self.persist(SETTINGS_KEY, &settings);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist(THEME_KEY, &theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn persist<T: Serialize>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialize {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.backend.set(key, &raw) {
            tracing::warn!("Failed to persist {}: {}", key, e);
        }
    }
}

fn read_or_default<S: KeyValueStore, T: DeserializeOwned + Default>(backend: &S, key: &str) -> T {
    match backend.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::debug!("Ignoring corrupt {} entry: {}", key, e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            tracing::debug!("Failed to read {}: {}", key, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryKeyValueStore;
    use crate::domain::{DispatchMode, DomainError, DEFAULT_TEMPERATURE};

    /// Backend whose reads and writes always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
            Err(DomainError::Storage("unavailable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), DomainError> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_backend_gives_defaults() {
        let store = SettingsStore::load(MemoryKeyValueStore::new());
        assert_eq!(store.get(), &DispatchSettings::default());
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_corrupt_entries_fall_back_silently() {
        let backend = MemoryKeyValueStore::new()
            .with_entry(SETTINGS_KEY, "{not json")
            .with_entry(THEME_KEY, "\"sepia\"");
        let store = SettingsStore::load(backend);

        assert_eq!(store.get(), &DispatchSettings::default());
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_set_persists_and_reloads() {
        let mut store = SettingsStore::load(MemoryKeyValueStore::new());
        store.set(SettingsPatch {
            mode: Some(DispatchMode::Proxied),
            api_key: Some("sk-or-1".to_string()),
            ..Default::default()
        });
        store.set_theme(Theme::Light);

        let reloaded = SettingsStore::load(store.backend().clone());
        assert_eq!(reloaded.get().mode, DispatchMode::Proxied);
        assert_eq!(reloaded.get().api_key, "sk-or-1");
        assert_eq!(reloaded.get().temperature, DEFAULT_TEMPERATURE);
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn test_failing_backend_keeps_memory_state() {
        let mut store = SettingsStore::load(BrokenStore);
        assert_eq!(store.get(), &DispatchSettings::default());

        store.set(SettingsPatch {
            model: Some("openai/gpt-oss-20b:free".to_string()),
            ..Default::default()
        });
        assert_eq!(store.toggle_theme(), Theme::Light);

        assert_eq!(store.get().model, "openai/gpt-oss-20b:free");
        assert_eq!(store.theme(), Theme::Light);
    }
}
