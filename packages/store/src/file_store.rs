//! # Filesystem-backed storage
//!
//! [`FileStore`] persists each key as a small file under a base directory. It is
//! used on desktop to keep the session and theme across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token          # bearer token
//! └── theme          # "dark" or "light"
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/mindvault/` |
//! | Linux | `~/.local/share/mindvault/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\mindvault\` |

use std::path::PathBuf;

use crate::storage::Storage;

/// Filesystem-backed storage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; strip separators so a key can never escape the base.
        let name: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        self.base.join(name)
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.key_path(key)).ok()?;
        Some(content.trim_end_matches('\n').to_string())
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create storage dir {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to persist {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.key_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(path) {
                tracing::warn!("Failed to remove {key}: {e}");
            }
        }
    }
}
