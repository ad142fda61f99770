//! TOML files written via tmp file + fsync + rename, with an exclusive lock
//! around read-modify-write cycles.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Lock error: {0}")]
    Lock(String),
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Handle to a TOML document on disk.
///
/// - `save` never leaves a half-written file: data goes to `.<name>.tmp`,
///   is fsynced, then renamed over the target.
/// - `update` holds an exclusive lock on `<name>.lock` for the whole
///   load/modify/save cycle.
/// - With [`private`](Self::private), the file is restricted to the owner
///   (0600) on Unix.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    private: bool,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            private: false,
            _phantom: PhantomData,
        }
    }

    /// Restricts the file to its owner on every save.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and parses the file.
    ///
    /// Returns `Ok(None)` when the file does not exist or is blank.
    pub fn load(&self) -> Result<Option<T>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(toml::from_str(&content)?))
    }

    pub fn save(&self, data: &T) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let content = toml::to_string_pretty(data)?;
        let tmp_path = self.temp_path()?;

        let mut tmp_file = File::create(&tmp_path).map_err(|e| StorageError::io(&tmp_path, e))?;
        if self.private {
            restrict_to_owner(&tmp_file).map_err(|e| StorageError::io(&tmp_path, e))?;
        }
        tmp_file
            .write_all(content.as_bytes())
            .and_then(|_| tmp_file.sync_all())
            .map_err(|e| StorageError::io(&tmp_path, e))?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))
    }

    /// Loads (or starts from `default_value`), applies `f`, and saves, all
    /// under the file lock.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut T),
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data);
        self.save(&data)
    }

    /// Deletes the file. Missing files are not an error.
    pub fn remove(&self) -> Result<(), StorageError> {
        let _lock = FileLock::acquire(&self.path)?;

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }

    fn temp_path(&self) -> Result<PathBuf, StorageError> {
        let invalid = |reason: &str| {
            StorageError::io(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, reason.to_string()),
            )
        };

        let parent = self.path.parent().ok_or_else(|| invalid("path has no parent directory"))?;
        let file_name = self.path.file_name().ok_or_else(|| invalid("path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

#[cfg(unix)]
fn restrict_to_owner(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_file: &File) -> std::io::Result<()> {
    Ok(())
}

/// Exclusive lock on `<path>.lock`, released and removed on drop.
struct FileLock {
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, StorageError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| StorageError::io(&lock_path, e))?;

        use fs2::FileExt;
        file.lock_exclusive()
            .map_err(|e| StorageError::Lock(format!("{}: {}", lock_path.display(), e)))?;

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
        let _ = fs::remove_file(&self.lock_path);
    }
}
