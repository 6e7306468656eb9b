//! Collection subscription lifecycle for one authenticated session.
//!
//! The manager opens exactly one live subscription per (collection, scope)
//! pair and forwards every snapshot delivery into the session's single
//! ordered event queue.  Teardown is synchronous: forwarding tasks are
//! aborted on the spot, so a subscription opened for a previous identity can
//! never deliver into the next session's queue even if the remote task has
//! not yet processed the unsubscribe.

use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use hotelos_shared::constants::{
    COLLECTION_AGENDA, COLLECTION_CONTACTS, COLLECTION_GROUPS, COLLECTION_INVENTORY,
    COLLECTION_MAINTENANCE, COLLECTION_RECEPTION, COLLECTION_ROOMS, COLLECTION_SPA,
    COLLECTION_TASKS,
};
use hotelos_shared::types::UserId;

use crate::error::{Result, SyncError};
use crate::remote::{RawDocument, RemoteCommand, Scope, SubscriptionId};

/// One message on the session's ordered event queue.
#[derive(Debug)]
pub enum SessionEvent {
    /// A full snapshot of one collection arrived.
    Snapshot {
        collection: String,
        docs: Vec<RawDocument>,
    },
}

struct OpenSubscription {
    id: SubscriptionId,
    forward: tokio::task::JoinHandle<()>,
}

/// Owns every live subscription of one authenticated session.
pub struct SubscriptionManager {
    cmd_tx: mpsc::Sender<RemoteCommand>,
    open: HashMap<(String, Scope), OpenSubscription>,
}

impl SubscriptionManager {
    pub fn new(cmd_tx: mpsc::Sender<RemoteCommand>) -> Self {
        Self {
            cmd_tx,
            open: HashMap::new(),
        }
    }

    /// Open the standard set of subscriptions for `user`: every shared
    /// collection plus the three user-scoped ones.
    pub async fn open_all_for(
        &mut self,
        user: &UserId,
        events_tx: &mpsc::Sender<SessionEvent>,
    ) -> Result<()> {
        for collection in [
            COLLECTION_ROOMS,
            COLLECTION_MAINTENANCE,
            COLLECTION_INVENTORY,
            COLLECTION_RECEPTION,
            COLLECTION_GROUPS,
            COLLECTION_SPA,
        ] {
            self.open(collection, Scope::Shared, events_tx.clone()).await?;
        }
        for collection in [COLLECTION_TASKS, COLLECTION_AGENDA, COLLECTION_CONTACTS] {
            self.open(collection, Scope::User(user.clone()), events_tx.clone())
                .await?;
        }
        info!(user = %user, count = self.open.len(), "session subscriptions opened");
        Ok(())
    }

    /// Open one subscription and start forwarding its snapshots into the
    /// session event queue.
    pub async fn open(
        &mut self,
        collection: &str,
        scope: Scope,
        events_tx: mpsc::Sender<SessionEvent>,
    ) -> Result<()> {
        let key = (collection.to_string(), scope.clone());
        if self.open.contains_key(&key) {
            return Err(SyncError::AlreadySubscribed(collection.to_string()));
        }

        let (snapshot_tx, mut snapshot_rx) = mpsc::channel(16);
        let (reply_tx, reply_rx) = oneshot::channel();
        self.cmd_tx
            .send(RemoteCommand::Subscribe {
                collection: collection.to_string(),
                scope: scope.clone(),
                snapshot_tx,
                reply: reply_tx,
            })
            .await
            .map_err(|_| SyncError::RemoteUnavailable)?;
        let id = reply_rx.await.map_err(|_| SyncError::RemoteUnavailable)?;

        let name = collection.to_string();
        let forward = tokio::spawn(async move {
            while let Some(docs) = snapshot_rx.recv().await {
                debug!(collection = %name, count = docs.len(), "snapshot delivered");
                if events_tx
                    .send(SessionEvent::Snapshot {
                        collection: name.clone(),
                        docs,
                    })
                    .await
                    .is_err()
                {
                    // Session queue gone; the subscription is torn down
                    // separately.
                    break;
                }
            }
        });

        self.open.insert(key, OpenSubscription { id, forward });
        Ok(())
    }

    /// Tear down every subscription.  Completes before returning: forwarding
    /// stops immediately, unsubscribe commands go out best-effort.
    pub fn teardown(&mut self) {
        let count = self.open.len();
        for (_, sub) in self.open.drain() {
            sub.forward.abort();
            if let Err(e) = self.cmd_tx.try_send(RemoteCommand::Unsubscribe(sub.id)) {
                warn!(error = %e, "could not notify remote of unsubscribe");
            }
        }
        if count > 0 {
            info!(count, "session subscriptions torn down");
        }
    }

    /// Number of currently open subscriptions.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

impl Drop for SubscriptionManager {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::spawn_memory_remote;
    use serde_json::json;

    #[tokio::test]
    async fn test_opens_one_subscription_per_pair() {
        let cmd_tx = spawn_memory_remote();
        let (events_tx, _events_rx) = mpsc::channel(64);
        let mut manager = SubscriptionManager::new(cmd_tx);

        manager
            .open(COLLECTION_ROOMS, Scope::Shared, events_tx.clone())
            .await
            .unwrap();
        let again = manager
            .open(COLLECTION_ROOMS, Scope::Shared, events_tx.clone())
            .await;
        assert!(matches!(again, Err(SyncError::AlreadySubscribed(_))));
        assert_eq!(manager.len(), 1);
    }

    #[tokio::test]
    async fn test_open_all_for_covers_every_collection() {
        let cmd_tx = spawn_memory_remote();
        let (events_tx, mut events_rx) = mpsc::channel(64);
        let mut manager = SubscriptionManager::new(cmd_tx);

        manager
            .open_all_for(&UserId::from("U"), &events_tx)
            .await
            .unwrap();
        assert_eq!(manager.len(), 9);

        // Nine initial deliveries, one per subscription.
        let mut seen = Vec::new();
        for _ in 0..9 {
            match events_rx.recv().await.unwrap() {
                SessionEvent::Snapshot { collection, .. } => seen.push(collection),
            }
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 9);
    }

    #[tokio::test]
    async fn test_teardown_stops_forwarding() {
        let cmd_tx = spawn_memory_remote();
        let (events_tx, mut events_rx) = mpsc::channel(64);
        let mut manager = SubscriptionManager::new(cmd_tx.clone());

        manager
            .open(COLLECTION_ROOMS, Scope::Shared, events_tx.clone())
            .await
            .unwrap();
        // Drain the initial delivery.
        events_rx.recv().await.unwrap();

        manager.teardown();
        assert!(manager.is_empty());

        cmd_tx
            .send(RemoteCommand::Save {
                collection: COLLECTION_ROOMS.to_string(),
                document: json!({"id": "room-101", "number": "101"}),
            })
            .await
            .unwrap();

        // The write above must not reach the old session's queue.  Drop our
        // sender half so the queue closes once all forwarders are gone.
        drop(events_tx);
        assert!(events_rx.recv().await.is_none());
    }
}
