use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::constants::COLLECTION_ROOMS;
use hotelos_shared::entities::{LaundryIssue, Room};
use hotelos_store::keys;
use hotelos_sync::{check, Capability};

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Apply a room-status board update: the list replaces the view model
/// optimistically, then each room is dispatched independently.  The next
/// rooms snapshot reflects whichever subset of the batch succeeded.
pub async fn update_rooms(state: &Arc<Mutex<AppState>>, rooms: Vec<Room>) -> Result<usize> {
    let writer = {
        let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Housekeeping)?;
        guard.view.rooms = rooms.clone();
        guard.writer()?
    };

    let accepted = writer.write_all(COLLECTION_ROOMS, &rooms).await;
    info!(accepted, total = rooms.len(), "Room board dispatched");
    Ok(accepted)
}

/// Replace the laundry issue list.  Cache-only: laundry has no live
/// subscription, the cache is its source of truth.
pub fn save_laundry_issues(
    state: &Arc<Mutex<AppState>>,
    issues: Vec<LaundryIssue>,
) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::Housekeeping)?;

    guard.view.laundry_issues = issues;
    let issues = guard.view.laundry_issues.clone();
    guard.cache()?.save(keys::LAUNDRY, &issues)?;
    Ok(())
}
