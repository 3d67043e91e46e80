//! Snapshot persistence over a string key-value store.
//!
//! The three pieces of widget state live under independent keys, each
//! JSON-encoded. Keys are scoped under a namespace prefix so clearing the
//! widget never touches unrelated entries sharing the same store.

use std::collections::BTreeMap;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{InputState, Snapshot, Suggestion};
use crate::error::Result;

pub const QUERIES_KEY: &str = "queries";
pub const SELECTED_LOGO_KEY: &str = "selectedLogo";
pub const INPUT_VALUE_KEY: &str = "inputValue";

const WIDGET_KEYS: [&str; 3] = [QUERIES_KEY, SELECTED_LOGO_KEY, INPUT_VALUE_KEY];

/// Synchronous string store (browser `localStorage`, a JSON file, memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads and writes [`Snapshot`]s under a namespace
#[derive(Debug, Clone)]
pub struct SnapshotStore<S> {
    store: S,
    namespace: String,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    /// An empty namespace uses the bare key names.
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn key(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}:{}", self.namespace, name)
        }
    }

    /// Missing or unreadable keys fall back to their defaults.
    pub fn load(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            queries: self.read::<Vec<Suggestion>>(QUERIES_KEY)?.unwrap_or_default(),
            selected_logo: self.read::<Option<Suggestion>>(SELECTED_LOGO_KEY)?.flatten(),
            input_value: self.read::<InputState>(INPUT_VALUE_KEY)?.unwrap_or_default(),
        })
    }

    /// Rewrite all three keys. A default snapshot leaves the namespace empty.
    pub fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if snapshot.is_empty() {
            return self.clear();
        }
        self.write(QUERIES_KEY, &snapshot.queries)?;
        self.write(SELECTED_LOGO_KEY, &snapshot.selected_logo)?;
        self.write(INPUT_VALUE_KEY, &snapshot.input_value)
    }

    /// Remove the widget's keys
    pub fn clear(&mut self) -> Result<()> {
        for name in WIDGET_KEYS {
            let key = self.key(name);
            self.store.remove(&key)?;
        }
        Ok(())
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let key = self.key(name);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring unreadable stored value for '{}': {}", key, e);
                Ok(None)
            }
        }
    }

    fn write<T: Serialize>(&mut self, name: &str, value: &T) -> Result<()> {
        let key = self.key(name);
        let raw = serde_json::to_string(value)?;
        self.store.set(&key, &raw)
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::KeyValueStore;
    use crate::error::Result;

    /// Key-value store persisted as one JSON object on disk.
    ///
    /// Every write rewrites the whole file.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
        entries: BTreeMap<String, String>,
    }

    impl FileStore {
        /// Open `path`, starting empty when the file does not exist yet
        pub fn open(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref().to_path_buf();
            let entries = if path.exists() {
                let raw = std::fs::read_to_string(&path)?;
                if raw.trim().is_empty() {
                    BTreeMap::new()
                } else {
                    serde_json::from_str(&raw)?
                }
            } else {
                BTreeMap::new()
            };
            Ok(Self { path, entries })
        }

        fn flush(&self) -> Result<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let raw = serde_json::to_string_pretty(&self.entries)?;
            std::fs::write(&self.path, raw)?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.entries.insert(key.to_string(), value.to_string());
            self.flush()
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            if self.entries.remove(key).is_some() {
                self.flush()?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            queries: vec![Suggestion::new("Nike, Inc.", "nike.com", "https://logo/nike.png")],
            selected_logo: None,
            input_value: InputState::open("nike"),
        }
    }

    #[test]
    fn test_round_trip() {
        let mut store = SnapshotStore::new(MemoryStore::new(), "logo-search");
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_keys_are_namespaced() {
        let mut store = SnapshotStore::new(MemoryStore::new(), "logo-search");
        store.save(&sample()).unwrap();

        let keys: Vec<_> = store.inner().keys().collect();
        assert_eq!(
            keys,
            vec!["logo-search:inputValue", "logo-search:queries", "logo-search:selectedLogo"]
        );
        assert_eq!(
            store.inner().get("logo-search:selectedLogo").unwrap().as_deref(),
            Some("null")
        );
    }

    #[test]
    fn test_bare_keys_without_namespace() {
        let mut store = SnapshotStore::new(MemoryStore::new(), "");
        store.save(&sample()).unwrap();
        assert_eq!(
            store.inner().get("inputValue").unwrap().as_deref(),
            Some(r#"{"text":"nike","active":true}"#)
        );
    }

    #[test]
    fn test_clear_leaves_unrelated_keys() {
        let mut backing = MemoryStore::new();
        backing.set("theme", "dark").unwrap();
        backing.set("queries", "[]").unwrap();

        let mut store = SnapshotStore::new(backing, "logo-search");
        store.save(&sample()).unwrap();
        store.clear().unwrap();

        let keys: Vec<_> = store.inner().keys().collect();
        assert_eq!(keys, vec!["queries", "theme"]);
    }

    #[test]
    fn test_default_snapshot_empties_namespace() {
        let mut store = SnapshotStore::new(MemoryStore::new(), "ns");
        store.save(&sample()).unwrap();
        store.save(&Snapshot::default()).unwrap();
        assert!(store.inner().is_empty());
    }

    #[test]
    fn test_corrupted_key_is_ignored() {
        let mut backing = MemoryStore::new();
        backing.set("ns:queries", "[{not json").unwrap();
        backing.set("ns:inputValue", r#"{"text":"nike","active":false}"#).unwrap();

        let store = SnapshotStore::new(backing, "ns");
        let snapshot = store.load().unwrap();
        assert!(snapshot.queries.is_empty());
        assert_eq!(snapshot.input_value, InputState::Closed("nike".to_string()));
    }
}
