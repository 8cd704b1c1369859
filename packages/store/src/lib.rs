pub mod config;
pub mod draft;
pub mod filter;
pub mod models;
pub mod storage;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::ClientConfig;
pub use draft::{merge_tags, parse_tags, IdeaDraft};
pub use filter::{bar_width, group_by_tag, IdeaFilter, ViewMode};
pub use models::{
    AuthResponse, CombineRequest, DashboardStats, Idea, IdeaPatch, IdeaPayload, Priority,
    PriorityBreakdown, SmartSuggestion, User, UserSummary,
};
pub use storage::{SharedStorage, Storage, THEME_KEY, TOKEN_KEY};
