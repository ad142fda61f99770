//! Loads and caches `config.toml`.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use vitesse_core::config::RootConfig;

use crate::paths::VitessePaths;
use crate::storage::{AtomicTomlFile, StorageError};

/// Configuration service that loads and caches the root configuration.
///
/// Missing or unreadable files fall back to [`RootConfig::default`]; the
/// failure is logged rather than returned.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<RootConfig>>,
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &VitessePaths) -> Self {
        Self::with_path(paths.config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> RootConfig {
        if let Some(cached) = self.config.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            return cached.clone();
        }

        let loaded = match self.file.load() {
            Ok(Some(config)) => config,
            Ok(None) => RootConfig::default(),
            Err(e) => {
                tracing::warn!(
                    "[ConfigService] Failed to load {}: {}. Using defaults.",
                    self.file.path().display(),
                    e
                );
                RootConfig::default()
            }
        };

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        loaded
    }

    /// Writes the default configuration if no file exists yet.
    pub fn ensure_config_file(&self) -> Result<PathBuf, StorageError> {
        if !self.file.path().exists() {
            self.file.save(&RootConfig::default())?;
            tracing::info!(
                "[ConfigService] Created default config at {}",
                self.file.path().display()
            );
        }
        Ok(self.file.path().to_path_buf())
    }

    /// Persists `config` and refreshes the cache.
    pub fn save_config(&self, config: &RootConfig) -> Result<(), StorageError> {
        self.file.save(config)?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
