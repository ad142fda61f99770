//! [`TokenStore`] implementations.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use vitesse_core::auth::{TOKEN_KEY, TokenStore};

use crate::paths::VitessePaths;
use crate::storage::AtomicTomlFile;

type Entries = BTreeMap<String, String>;

/// Durable token store backed by a private key-value TOML file.
///
/// The token lives under the `authToken` key of `credentials.toml`. Storage
/// failures are logged and otherwise swallowed; a token that could not be
/// written or read is reported as absent.
pub struct FileTokenStore {
    file: AtomicTomlFile<Entries>,
}

impl FileTokenStore {
    pub fn from_paths(paths: &VitessePaths) -> Self {
        Self::with_path(paths.credentials_file())
    }

    /// Store at a custom file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path).private(),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &str) {
        let result = self.file.update(Entries::new(), |entries| {
            entries.insert(TOKEN_KEY.to_string(), token.to_string());
        });

        match result {
            Ok(()) => {
                tracing::debug!("[TokenStore] Token saved to {}", self.file.path().display())
            }
            Err(e) => {
                tracing::warn!("[TokenStore] Failed to save token: {}", e);
                // A previous token must not outlive a failed save.
                if let Err(e) = self.file.remove() {
                    tracing::warn!("[TokenStore] Failed to drop stale token: {}", e);
                }
            }
        }
    }

    fn get(&self) -> Option<String> {
        match self.file.load() {
            Ok(entries) => entries.and_then(|mut entries| entries.remove(TOKEN_KEY)),
            Err(e) => {
                tracing::warn!("[TokenStore] Failed to read token: {}", e);
                None
            }
        }
    }

    fn clear(&self) {
        let result = self.file.update(Entries::new(), |entries| {
            entries.remove(TOKEN_KEY);
        });

        if let Err(e) = result {
            tracing::warn!("[TokenStore] Failed to clear token: {}", e);
        }
    }
}

/// Volatile token store.
///
/// [`failing`](Self::failing) builds a store whose writes never stick, which
/// simulates a persistence failure.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<String>>,
    fail_writes: bool,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
            fail_writes: false,
        }
    }

    /// Store that drops every write, so `get` stays `None` after `save`.
    pub fn failing() -> Self {
        Self {
            token: Mutex::new(None),
            fail_writes: true,
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn save(&self, token: &str) {
        if self.fail_writes {
            tracing::warn!("[TokenStore] Simulated persistence failure, token dropped");
            return;
        }
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
