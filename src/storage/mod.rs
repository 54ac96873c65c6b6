//! Storage is a module responsible for persisting uploaded image bytes.
//! The database never sees file contents, only the public path a store
//! call returns.

pub mod error;

use std::fs;
use std::path::PathBuf;

pub use self::error::StorageError;

/// Stores raw upload bytes durably before returning the public path
/// that gets recorded in image rows.
pub trait BlobStorage: Send + Sync {
    fn store(&self, filename: &str, content: &[u8]) -> Result<String, StorageError>;
}

/// Filesystem backed storage under a configured root directory
pub struct LocalStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalStorage {
    /// Creates the storage with its root directory, making the directory
    /// if it does not exist yet.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(root: P, public_prefix: S) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StorageError::Io(format!("Create storage root {}: {}", root.display(), e)))?;
        Ok(Self {
            root,
            public_prefix: public_prefix.into(),
        })
    }
}

impl BlobStorage for LocalStorage {
    fn store(&self, filename: &str, content: &[u8]) -> Result<String, StorageError> {
        let target = self.root.join(filename);
        debug!("Store {} bytes at {}.", content.len(), target.display());
        fs::write(&target, content).map_err(|e| StorageError::Io(format!("Write {}: {}", target.display(), e)))?;
        Ok(format!("{}/{}", self.public_prefix, filename))
    }
}
