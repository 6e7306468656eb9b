use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::constants::COLLECTION_AGENDA;
use hotelos_shared::entities::CalendarEvent;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Persist a calendar event to the user's agenda collection.  Ownership is
/// stamped at dispatch; the event reappears through the agenda subscription.
pub async fn save_event(state: &Arc<Mutex<AppState>>, event: CalendarEvent) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        guard.profile()?;
        guard.writer()?
    };

    writer.write(COLLECTION_AGENDA, &event).await?;
    info!(event = %event.id, "Calendar event saved");
    Ok(())
}

/// Delete a calendar event by id.
pub async fn delete_event(state: &Arc<Mutex<AppState>>, id: &str) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        guard.writer()?
    };
    writer.remove(COLLECTION_AGENDA, id).await?;
    info!(event = %id, "Calendar event deleted");
    Ok(())
}
