use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::{info, warn};

use hotelos_sync::{SessionEvent, SubscriptionManager, WriteCoordinator};

use crate::events::*;
use crate::state::AppState;

/// Open the session's subscriptions, store the write coordinator in
/// [`AppState`], and spawn the processing loop that reconciles snapshot
/// deliveries into the view model.
///
/// Requires a signed-in profile and a configured remote channel.  All
/// deliveries funnel through one queue and are applied strictly in arrival
/// order; per-collection ordering is preserved end to end.
pub async fn start_sync_and_bridge(state: Arc<Mutex<AppState>>) -> anyhow::Result<()> {
    let (uid, cmd_tx) = {
        let guard = state.lock().map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        let profile = guard
            .profile
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No profile loaded"))?;
        let cmd_tx = guard
            .remote_tx
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Remote store not configured"))?;
        (profile.uid.clone(), cmd_tx)
    };

    let (events_tx, events_rx) = mpsc::channel::<SessionEvent>(64);

    let mut subscriptions = SubscriptionManager::new(cmd_tx.clone());
    subscriptions
        .open_all_for(&uid, &events_tx)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open subscriptions: {e}"))?;

    // Store writer + subscriptions in AppState.
    {
        let mut guard = state.lock().map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        guard.writer = Some(WriteCoordinator::new(cmd_tx, uid.clone()));
        guard.subscriptions = Some(subscriptions);
    }

    info!(user = %uid, "Sync session started");

    // Spawn snapshot processing loop
    let state_clone = state.clone();
    tokio::spawn(async move {
        bridge_loop(state_clone, events_rx).await;
    });

    Ok(())
}

/// Main loop that receives snapshot deliveries and reconciles them into the
/// view model, notifying the UI after each application.
async fn bridge_loop(state: Arc<Mutex<AppState>>, mut events_rx: mpsc::Receiver<SessionEvent>) {
    info!("Sync bridge started");

    while let Some(event) = events_rx.recv().await {
        match event {
            SessionEvent::Snapshot { collection, docs } => {
                let count = docs.len();
                let notifier = {
                    let mut guard = match state.lock() {
                        Ok(g) => g,
                        Err(_) => return,
                    };
                    guard.view.apply_snapshot(&collection, docs);
                    guard.notifier.clone()
                };

                if let Some(notifier) = notifier {
                    notifier.emit(
                        EVENT_SNAPSHOT_APPLIED,
                        SnapshotAppliedPayload { collection, count },
                    );
                }
            }
        }
    }

    warn!("Sync bridge ended");
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelos_shared::constants::COLLECTION_ROOMS;
    use hotelos_shared::entities::{Room, RoomStatusFront, RoomStatusHk};
    use hotelos_shared::permissions::{Role, UserPermissions, UserProfile};
    use hotelos_shared::types::UserId;
    use hotelos_store::{defaults, CacheDb};
    use hotelos_sync::spawn_memory_remote;

    use crate::events::UiNotifier;

    fn profile(uid: &str) -> UserProfile {
        UserProfile {
            uid: UserId::from(uid),
            email: format!("{uid}@hotel.example"),
            display_name: uid.to_string(),
            role: Role::Admin,
            permissions: UserPermissions::all(),
            created_at: 0,
        }
    }

    // The full bootstrap path: empty cache seeds built-in defaults, then the
    // first real snapshot supersedes them wholesale.
    #[tokio::test]
    async fn test_defaults_then_first_snapshot() {
        let state = Arc::new(Mutex::new(AppState::new()));
        let (notifier, mut ui_rx) = UiNotifier::channel();

        {
            let mut guard = state.lock().unwrap();
            guard.cache = Some(CacheDb::open_in_memory().unwrap());
            guard.remote_tx = Some(spawn_memory_remote());
            guard.notifier = Some(notifier);
            guard.profile = Some(profile("U"));
            guard.seed_view_from_cache().unwrap();

            // Before any snapshot: the built-in defaults.
            assert_eq!(guard.view.rooms, defaults::rooms());
        }

        start_sync_and_bridge(state.clone()).await.unwrap();

        let room = Room {
            id: "room-501".to_string(),
            number: "501".to_string(),
            floor: 5,
            kind: "suite".to_string(),
            status_front: RoomStatusFront::Arrival,
            status_hk: RoomStatusHk::NotStarted,
        };
        {
            let writer = state.lock().unwrap().writer().unwrap();
            writer.write(COLLECTION_ROOMS, &room).await.unwrap();
        }

        // Wait for the rooms snapshot that carries the write.
        loop {
            let event = ui_rx.recv().await.expect("bridge should keep emitting");
            assert_eq!(event.name, crate::events::EVENT_SNAPSHOT_APPLIED);
            if event.payload["collection"] == COLLECTION_ROOMS && event.payload["count"] == 1 {
                break;
            }
        }

        // The room list is exactly the snapshot's contents, defaults gone.
        let guard = state.lock().unwrap();
        assert_eq!(guard.view.rooms, vec![room]);
    }
}
