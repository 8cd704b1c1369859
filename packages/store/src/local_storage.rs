//! # Browser `localStorage` backend
//!
//! [`LocalStorageStore`] is the [`Storage`] implementation used on the web
//! platform. It is a zero-size handle that looks up `window.localStorage` on
//! every call, so it is `Send + Sync` and can sit in shared context.
//!
//! Errors (no window, storage disabled, quota exceeded) are logged and
//! swallowed per the [`crate::storage`] contract.

use crate::storage::Storage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Storage for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {key} not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {key} not removed");
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("Failed to remove {key} from localStorage");
        }
    }
}
