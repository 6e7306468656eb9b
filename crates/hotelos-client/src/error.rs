use thiserror::Error;

use hotelos_store::StoreError;
use hotelos_sync::{AccessDenied, SyncError};

/// Errors surfaced by command handlers.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No profile is signed in.
    #[error("No profile loaded")]
    NotSignedIn,

    /// The local cache has not been opened.
    #[error("Cache not opened")]
    CacheNotOpen,

    /// The remote store is not configured for this session.
    #[error("Remote store not configured")]
    RemoteNotConfigured,

    /// The access gate denied the action; the reason is user-facing.
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    /// A mutation intent was rejected or could not be dispatched.
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Local cache failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A document failed to (de)serialize.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    /// A command received a document that cannot round-trip (e.g. a
    /// contract without a provider name, which would re-classify as a
    /// ticket on the next snapshot).
    #[error("Invalid document: {0}")]
    Invalid(String),

    /// Application state lock poisoned by a panicking holder.
    #[error("Lock poisoned")]
    LockPoisoned,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
