//! Client-scoped preference storage.
//!
//! A small key-value store holding scalar string preferences (active theme,
//! saved previous theme) as a flat TOML table under the platform config
//! directory. The store is handed to whoever needs it as a
//! `Box<dyn PreferenceStore>`, so state machines built on top of it can be
//! tested against the in-memory implementation.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// String key-value storage with write-through persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("malformed preference file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Preferences backed by a TOML file, written through on every change.
pub struct FilePrefs {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePrefs {
    /// Open the store at the platform default location. Returns `None` when
    /// no config directory can be resolved.
    pub fn open_default() -> Option<Self> {
        let path = dirs::config_dir()?.join("termfolio").join("prefs.toml");
        Some(Self::open(path))
    }

    /// Open the store at an explicit path. A missing file is an empty store;
    /// a malformed file is logged and treated as empty.
    pub fn open(path: PathBuf) -> Self {
        let values = match load_values(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("discarding preferences: {e:#}");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn flush(&self) {
        if let Err(e) = self.write_out() {
            // In-memory state stays authoritative for this session.
            tracing::warn!("failed to persist preferences: {e:#}");
        }
    }

    fn write_out(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create preference directory {}", parent.display())
            })?;
        }
        let contents =
            toml::to_string_pretty(&self.values).context("failed to serialize preferences")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("failed to write preferences to {}", self.path.display()))?;
        Ok(())
    }
}

fn load_values(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read preferences from {}", path.display()))?;
    let values = toml::from_str(&contents).map_err(PrefsError::Parse)?;
    Ok(values)
}

impl PreferenceStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush();
        }
    }
}

/// Volatile store used when no config directory exists, and as the test
/// double for everything layered on `PreferenceStore`.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: BTreeMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Open the platform store, falling back to a volatile one.
pub fn open_store() -> Box<dyn PreferenceStore> {
    match FilePrefs::open_default() {
        Some(prefs) => Box::new(prefs),
        None => {
            tracing::warn!("no config directory found, preferences will not persist");
            Box::new(MemoryPrefs::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut prefs = MemoryPrefs::new();
        assert_eq!(prefs.get("theme"), None);
        prefs.set("theme", "dark");
        assert_eq!(prefs.get("theme"), Some("dark".to_string()));
        prefs.remove("theme");
        assert_eq!(prefs.get("theme"), None);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("termfolio-prefs-{}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);

        {
            let mut prefs = FilePrefs::open(path.clone());
            prefs.set("theme", "light");
            prefs.set("previous_theme", "system");
            prefs.remove("previous_theme");
        }

        let reopened = FilePrefs::open(path.clone());
        assert_eq!(reopened.get("theme"), Some("light".to_string()));
        assert_eq!(reopened.get("previous_theme"), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let path = std::env::temp_dir().join(format!("termfolio-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "not [valid toml").unwrap();
        let prefs = FilePrefs::open(path.clone());
        assert_eq!(prefs.get("theme"), None);
        let _ = std::fs::remove_file(&path);
    }
}
