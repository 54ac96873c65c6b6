//! Error for blob storage

/// Error for blob storage
#[derive(Debug, Fail)]
pub enum StorageError {
    #[fail(display = "Io Error: {}", _0)]
    Io(String),
}
