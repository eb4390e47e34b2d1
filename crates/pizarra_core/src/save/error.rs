use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupted data")]
    Corrupted,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl SaveError {
    /// Whether hydration may proceed on defaults after this error.
    /// Everything here is recoverable except an unreadable backing
    /// store, where writes would silently vanish too.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::Json(_) => true,
            SaveError::Corrupted => true,
            SaveError::VersionMismatch { .. } => true,
            SaveError::StorageUnavailable(_) => false,
        }
    }
}
