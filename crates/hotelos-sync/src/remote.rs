//! Remote document store task with tokio mpsc command pattern.
//!
//! The store event loop runs in a dedicated tokio task.  External code
//! communicates with it through a typed command channel; each subscription
//! receives full snapshots over its own channel.  Per-collection deliveries
//! are strictly ordered (single task, FIFO channels); deliveries across
//! collections carry no ordering guarantee.
//!
//! The in-memory backend below is the development and test implementation.
//! A networked backend only has to consume the same [`RemoteCommand`] stream.

use std::collections::{BTreeMap, HashMap};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use hotelos_shared::constants::ID_FIELD;
use hotelos_shared::types::UserId;

use crate::document::owner_id;

/// An untyped remote document: a JSON record with a string `id`.
pub type RawDocument = serde_json::Value;

/// Visibility scope of a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Every authenticated user observes the same stream.
    Shared,
    /// Filtered to documents stamped with this owner id.
    User(UserId),
}

/// Handle identifying one live subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// ---------------------------------------------------------------------------
// Command types
// ---------------------------------------------------------------------------

/// Commands sent *into* the remote store task.
#[derive(Debug)]
pub enum RemoteCommand {
    /// Upsert one document (full-document write, no partial patch).
    Save {
        collection: String,
        document: RawDocument,
    },
    /// Delete one document by id.
    Delete { collection: String, id: String },
    /// Register a snapshot channel for a (collection, scope) pair.
    /// The current contents are delivered immediately, then on every change.
    Subscribe {
        collection: String,
        scope: Scope,
        snapshot_tx: mpsc::Sender<Vec<RawDocument>>,
        reply: oneshot::Sender<SubscriptionId>,
    },
    /// Drop a subscription; it never delivers again once processed.
    Unsubscribe(SubscriptionId),
    /// Gracefully shut down the store task.
    Shutdown,
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

struct Subscription {
    id: SubscriptionId,
    collection: String,
    scope: Scope,
    snapshot_tx: mpsc::Sender<Vec<RawDocument>>,
}

struct MemoryRemote {
    /// collection -> (document id -> document)
    contents: HashMap<String, BTreeMap<String, RawDocument>>,
    subscriptions: Vec<Subscription>,
    next_sub_id: u64,
}

/// Spawn the in-memory remote store in a background tokio task.
///
/// Returns the command channel.  Dropping it shuts the task down.
pub fn spawn_memory_remote() -> mpsc::Sender<RemoteCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel(64);

    tokio::spawn(async move {
        let mut remote = MemoryRemote {
            contents: HashMap::new(),
            subscriptions: Vec::new(),
            next_sub_id: 0,
        };
        remote.run(cmd_rx).await;
    });

    cmd_tx
}

/// Spawn the in-memory remote preloaded with collection contents.
pub fn spawn_memory_remote_with(
    seed: HashMap<String, Vec<RawDocument>>,
) -> mpsc::Sender<RemoteCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel(64);

    let mut contents: HashMap<String, BTreeMap<String, RawDocument>> = HashMap::new();
    for (collection, docs) in seed {
        let bucket = contents.entry(collection).or_default();
        for doc in docs {
            if let Some(id) = doc.get(ID_FIELD).and_then(|v| v.as_str()) {
                bucket.insert(id.to_string(), doc);
            }
        }
    }

    tokio::spawn(async move {
        let mut remote = MemoryRemote {
            contents,
            subscriptions: Vec::new(),
            next_sub_id: 0,
        };
        remote.run(cmd_rx).await;
    });

    cmd_tx
}

impl MemoryRemote {
    async fn run(&mut self, mut cmd_rx: mpsc::Receiver<RemoteCommand>) {
        info!("remote store task started");

        while let Some(command) = cmd_rx.recv().await {
            match command {
                RemoteCommand::Save {
                    collection,
                    document,
                } => {
                    let Some(id) = document.get(ID_FIELD).and_then(|v| v.as_str()) else {
                        warn!(collection, "rejecting save of document without id");
                        continue;
                    };
                    let id = id.to_string();
                    debug!(collection, id, "saving document");
                    self.contents
                        .entry(collection.clone())
                        .or_default()
                        .insert(id, document);
                    self.notify(&collection).await;
                }

                RemoteCommand::Delete { collection, id } => {
                    let removed = self
                        .contents
                        .get_mut(&collection)
                        .and_then(|bucket| bucket.remove(&id))
                        .is_some();
                    debug!(collection, id, removed, "deleting document");
                    if removed {
                        self.notify(&collection).await;
                    }
                }

                RemoteCommand::Subscribe {
                    collection,
                    scope,
                    snapshot_tx,
                    reply,
                } => {
                    let id = SubscriptionId(self.next_sub_id);
                    self.next_sub_id += 1;
                    debug!(collection, ?scope, sub = id.0, "subscription opened");

                    // Initial delivery: the full current contents.
                    let snapshot = self.snapshot_for(&collection, &scope);
                    if snapshot_tx.send(snapshot).await.is_ok() {
                        self.subscriptions.push(Subscription {
                            id,
                            collection,
                            scope,
                            snapshot_tx,
                        });
                    }
                    let _ = reply.send(id);
                }

                RemoteCommand::Unsubscribe(id) => {
                    debug!(sub = id.0, "subscription closed");
                    self.subscriptions.retain(|s| s.id != id);
                }

                RemoteCommand::Shutdown => break,
            }
        }

        info!("remote store task ended");
    }

    /// Full contents of `collection` visible under `scope`, in id order.
    fn snapshot_for(&self, collection: &str, scope: &Scope) -> Vec<RawDocument> {
        let Some(bucket) = self.contents.get(collection) else {
            return Vec::new();
        };
        bucket
            .values()
            .filter(|doc| match scope {
                Scope::Shared => true,
                Scope::User(uid) => owner_id(doc) == Some(uid.as_str()),
            })
            .cloned()
            .collect()
    }

    /// Redeliver the collection's contents to every matching subscription.
    async fn notify(&mut self, collection: &str) {
        let mut dead = Vec::new();
        for sub in self.subscriptions.iter().filter(|s| s.collection == collection) {
            let snapshot = self.snapshot_for(collection, &sub.scope);
            if sub.snapshot_tx.send(snapshot).await.is_err() {
                dead.push(sub.id);
            }
        }
        if !dead.is_empty() {
            debug!(count = dead.len(), "pruning dead subscriptions");
            self.subscriptions.retain(|s| !dead.contains(&s.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn subscribe(
        cmd_tx: &mpsc::Sender<RemoteCommand>,
        collection: &str,
        scope: Scope,
    ) -> (SubscriptionId, mpsc::Receiver<Vec<RawDocument>>) {
        let (snapshot_tx, snapshot_rx) = mpsc::channel(16);
        let (reply_tx, reply_rx) = oneshot::channel();
        cmd_tx
            .send(RemoteCommand::Subscribe {
                collection: collection.to_string(),
                scope,
                snapshot_tx,
                reply: reply_tx,
            })
            .await
            .unwrap();
        (reply_rx.await.unwrap(), snapshot_rx)
    }

    #[tokio::test]
    async fn test_save_triggers_full_snapshot() {
        let cmd_tx = spawn_memory_remote();
        let (_id, mut rx) = subscribe(&cmd_tx, "rooms", Scope::Shared).await;

        // Initial (empty) delivery.
        assert_eq!(rx.recv().await.unwrap(), Vec::<RawDocument>::new());

        cmd_tx
            .send(RemoteCommand::Save {
                collection: "rooms".to_string(),
                document: json!({"id": "room-101", "number": "101"}),
            })
            .await
            .unwrap();

        let snapshot = rx.recv().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0]["id"], "room-101");
    }

    #[tokio::test]
    async fn test_user_scope_filters_by_owner_stamp() {
        let cmd_tx = spawn_memory_remote();
        let (_u, mut rx_u) = subscribe(&cmd_tx, "tasks", Scope::User(UserId::from("U"))).await;
        let (_v, mut rx_v) = subscribe(&cmd_tx, "tasks", Scope::User(UserId::from("V"))).await;
        rx_u.recv().await.unwrap();
        rx_v.recv().await.unwrap();

        cmd_tx
            .send(RemoteCommand::Save {
                collection: "tasks".to_string(),
                document: json!({"id": "t1", "text": "x", "ownerId": "U"}),
            })
            .await
            .unwrap();

        let for_u = rx_u.recv().await.unwrap();
        assert_eq!(for_u.len(), 1);
        // V's subscription redelivers on the change, still without the doc.
        let for_v = rx_v.recv().await.unwrap();
        assert!(for_v.is_empty());
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_delivery() {
        let cmd_tx = spawn_memory_remote();
        let (id, mut rx) = subscribe(&cmd_tx, "spa", Scope::Shared).await;
        rx.recv().await.unwrap();

        cmd_tx.send(RemoteCommand::Unsubscribe(id)).await.unwrap();
        cmd_tx
            .send(RemoteCommand::Save {
                collection: "spa".to_string(),
                document: json!({"id": "spa-1"}),
            })
            .await
            .unwrap();
        // Channel closes without a further delivery.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_delete_redelivers_without_document() {
        let cmd_tx = spawn_memory_remote();
        let (_id, mut rx) = subscribe(&cmd_tx, "spa", Scope::Shared).await;
        rx.recv().await.unwrap();

        cmd_tx
            .send(RemoteCommand::Save {
                collection: "spa".to_string(),
                document: json!({"id": "spa-1"}),
            })
            .await
            .unwrap();
        assert_eq!(rx.recv().await.unwrap().len(), 1);

        cmd_tx
            .send(RemoteCommand::Delete {
                collection: "spa".to_string(),
                id: "spa-1".to_string(),
            })
            .await
            .unwrap();
        assert!(rx.recv().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_without_id_is_rejected() {
        let cmd_tx = spawn_memory_remote();
        let (_id, mut rx) = subscribe(&cmd_tx, "rooms", Scope::Shared).await;
        rx.recv().await.unwrap();

        cmd_tx
            .send(RemoteCommand::Save {
                collection: "rooms".to_string(),
                document: json!({"number": "101"}),
            })
            .await
            .unwrap();
        cmd_tx
            .send(RemoteCommand::Save {
                collection: "rooms".to_string(),
                document: json!({"id": "room-101", "number": "101"}),
            })
            .await
            .unwrap();

        // Only the valid save produced a delivery.
        let snapshot = rx.recv().await.unwrap();
        assert_eq!(snapshot.len(), 1);
    }
}
