//! The write coordinator: mutation intents stamped and dispatched to the
//! remote store.
//!
//! `write` is fire-and-forget with respect to reconciliation: it resolves
//! when the remote task has *accepted* the command, not when the resulting
//! snapshot lands.  The view model updates asynchronously when the
//! collection's subscription redelivers.  Batch writes are repeated
//! independent single-document writes; there is no multi-document
//! transaction and partial failure leaves a partially applied batch.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

use hotelos_shared::constants::{
    COLLECTION_AGENDA, COLLECTION_CONTACTS, COLLECTION_GROUPS, COLLECTION_TASKS, ID_FIELD,
    OWNER_FIELD, TYPE_DOC_CLIENT, TYPE_DOC_FIELD,
};
use hotelos_shared::types::UserId;

use crate::error::{Result, SyncError};
use crate::remote::{RawDocument, RemoteCommand};

/// Whether documents in `collection` are visible only inside their owner's
/// subscription.
pub fn is_user_scoped(collection: &str) -> bool {
    matches!(
        collection,
        COLLECTION_TASKS | COLLECTION_AGENDA | COLLECTION_CONTACTS
    )
}

/// Dispatches mutation intents for one acting user.
#[derive(Clone)]
pub struct WriteCoordinator {
    cmd_tx: mpsc::Sender<RemoteCommand>,
    user: UserId,
}

impl WriteCoordinator {
    pub fn new(cmd_tx: mpsc::Sender<RemoteCommand>, user: UserId) -> Self {
        Self { cmd_tx, user }
    }

    /// Serialize `value` and dispatch it to `collection`.
    ///
    /// For user-scoped collections the acting user's id is stamped into
    /// `ownerId` before dispatch — without the stamp the document would
    /// vanish from its owner's next snapshot.
    pub async fn write<T: Serialize>(&self, collection: &str, value: &T) -> Result<()> {
        let document = serde_json::to_value(value)?;
        self.write_raw(collection, document).await
    }

    /// Dispatch an already-raw document to `collection`.
    pub async fn write_raw(&self, collection: &str, mut document: RawDocument) -> Result<()> {
        if document.get(ID_FIELD).and_then(|v| v.as_str()).is_none() {
            return Err(SyncError::MissingDocumentId);
        }
        if is_user_scoped(collection) {
            document[OWNER_FIELD] = serde_json::Value::String(self.user.as_str().to_string());
        }
        self.cmd_tx
            .send(RemoteCommand::Save {
                collection: collection.to_string(),
                document,
            })
            .await
            .map_err(|_| SyncError::RemoteUnavailable)
    }

    /// Dispatch a client record to the groups collection, stamped with the
    /// explicit `type_doc` marker so classification routes it back as a
    /// client rather than a group.
    pub async fn write_client<T: Serialize>(&self, value: &T) -> Result<()> {
        let mut document = serde_json::to_value(value)?;
        document[TYPE_DOC_FIELD] = serde_json::Value::String(TYPE_DOC_CLIENT.to_string());
        self.write_raw(COLLECTION_GROUPS, document).await
    }

    /// Delete one document.
    pub async fn remove(&self, collection: &str, id: &str) -> Result<()> {
        self.cmd_tx
            .send(RemoteCommand::Delete {
                collection: collection.to_string(),
                id: id.to_string(),
            })
            .await
            .map_err(|_| SyncError::RemoteUnavailable)
    }

    /// Best-effort batch write: each document dispatched independently.
    /// Returns how many dispatches were accepted; failures are logged and
    /// skipped, never rolled back.
    pub async fn write_all<T: Serialize>(&self, collection: &str, values: &[T]) -> usize {
        let mut accepted = 0;
        for value in values {
            match self.write(collection, value).await {
                Ok(()) => accepted += 1,
                Err(e) => warn!(collection, error = %e, "batch write item failed"),
            }
        }
        accepted
    }
}
