//! # Durable client storage
//!
//! A tiny string key/value interface for state that must survive a reload:
//! the bearer token ([`TOKEN_KEY`]) and the theme choice ([`THEME_KEY`]).
//!
//! Implementations live in sibling modules:
//!
//! | Backend | Module | Used by |
//! |---------|--------|---------|
//! | [`crate::MemoryStore`] | `memory` | tests |
//! | [`crate::FileStore`] | `file_store` | desktop |
//! | [`crate::LocalStorageStore`] | `local_storage` | web (`web` feature, wasm only) |
//!
//! ## Error handling
//!
//! Methods never fail outward. Reads that cannot be served return `None` and
//! failed writes are logged and dropped, so a broken storage degrades to
//! "no saved session" instead of breaking the app.

use std::sync::Arc;

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";
/// Key under which the theme (`"dark"` / `"light"`) is persisted.
pub const THEME_KEY: &str = "theme";

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Type-erased storage shared across the UI.
pub type SharedStorage = Arc<dyn Storage + Send + Sync>;
