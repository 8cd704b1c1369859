//! Service objects shared through context.
//!
//! [`Services`] bundles the configuration, the backend client and durable
//! storage. The platform entry point builds one and provides it at the root;
//! views pull it with [`use_services`] instead of reaching for globals.
//!
//! [`make_storage`] picks the storage backend for the current platform:
//! - **Web** (WASM + `web` feature): browser `localStorage`
//! - **Desktop** (native): files under `<data_dir>/mindvault/`
//! - anything else: in-memory, lost on reload

use std::sync::Arc;

use api::{ApiClient, IdeaBoard, IdeaQuery, SessionManager};
use dioxus::prelude::*;
use store::{ClientConfig, SharedStorage};

#[derive(Clone)]
pub struct Services {
    pub config: ClientConfig,
    pub client: ApiClient,
    pub storage: SharedStorage,
}

impl Services {
    pub fn new(config: ClientConfig, storage: SharedStorage) -> Self {
        let client = ApiClient::from_config(&config);
        tracing::info!("Backend origin: {}", client.origin());
        Self {
            config,
            client,
            storage,
        }
    }

    pub fn session(&self) -> SessionManager<ApiClient, SharedStorage> {
        SessionManager::new(self.client.clone(), self.storage.clone())
    }

    pub fn board(&self, query: IdeaQuery) -> IdeaBoard<ApiClient> {
        IdeaBoard::new(self.client.clone(), query)
    }
}

/// Consume the [`Services`] provided at the app root.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Create the platform-appropriate durable storage.
pub fn make_storage() -> SharedStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("mindvault");
        Arc::new(store::FileStore::new(base))
    }
}
