use std::path::PathBuf;
use thiserror::Error;

/// Failures reading a fixture document from the data store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
