//! JSON values in browser `localStorage`.

use serde::{de::DeserializeOwned, Serialize};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read and deserialize a value; missing key, storage or bad JSON yield `None`
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed localStorage value '{}': {}", key, e);
            None
        }
    }
}

/// Serialize and store a value
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            let _ = storage.set_item(key, &raw);
        }
        Err(e) => log::error!("Failed to serialize '{}': {}", key, e),
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
