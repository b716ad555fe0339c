use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Cannot connect to database at {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
