use thiserror::Error;

/// Errors produced by the sync layer.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The remote store task is gone (channel closed).
    #[error("Remote store is not running")]
    RemoteUnavailable,

    /// A document was dispatched without an `id` field.
    #[error("Document has no id field")]
    MissingDocumentId,

    /// A value could not be serialized into a raw document.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A subscription for this (collection, scope) pair is already open.
    #[error("Subscription already open for collection '{0}'")]
    AlreadySubscribed(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SyncError>;
