//! `window.localStorage` adapter

use logo_search::storage::{KeyValueStore, SnapshotStore};
use logo_search::{Error, Result};
use wasm_bindgen::JsValue;

pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .ok_or_else(|| Error::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

/// Snapshot store over `localStorage` under `namespace`
pub fn snapshot_store(namespace: &str) -> Result<SnapshotStore<LocalStore>> {
    Ok(SnapshotStore::new(LocalStore::open()?, namespace))
}

fn js_error(err: JsValue) -> Error {
    Error::Storage(format!("{:?}", err))
}
