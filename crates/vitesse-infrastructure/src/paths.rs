//! Filesystem layout for the Vitesse client.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "vitesse";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform configuration directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves every file the client reads or writes.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/vitesse/           # Config directory (platform default)
/// ├── config.toml              # Client configuration
/// ├── credentials.toml         # Persisted bearer token (0600 on Unix)
/// └── logs/                    # Daily rolling log files
///     └── vitesse.log.YYYY-MM-DD
/// ```
#[derive(Debug, Clone)]
pub struct VitessePaths {
    config_dir: PathBuf,
}

impl VitessePaths {
    /// Uses the platform configuration directory (`dirs::config_dir()/vitesse`).
    pub fn platform() -> Result<Self, PathError> {
        let base = dirs::config_dir().ok_or(PathError::ConfigDirNotFound)?;
        Ok(Self {
            config_dir: base.join(APP_DIR_NAME),
        })
    }

    /// Roots every path under `config_dir` (for tests and portable installs).
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// File holding the persisted bearer token.
    pub fn credentials_file(&self) -> PathBuf {
        self.config_dir.join("credentials.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.config_dir.join("logs")
    }
}
