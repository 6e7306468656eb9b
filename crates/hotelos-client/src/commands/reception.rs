//! Reception commands: shift logs, wake-up calls, taxi bookings, lost items.
//!
//! All four kinds share the reception collection and are discriminated by
//! id prefix, so every creation path assigns a prefixed id before dispatch.
//! Updates are batch-style (the screens hand back whole lists) and each
//! document is written independently, best-effort.

use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::constants::{
    COLLECTION_RECEPTION, PREFIX_LOG, PREFIX_LOST_ITEM, PREFIX_TAXI, PREFIX_WAKEUP,
};
use hotelos_shared::entities::{LogEntry, LostItem, TaxiBooking, WakeUpCall};
use hotelos_shared::types::prefixed_id;
use hotelos_sync::{check, Capability, WriteCoordinator};

use crate::error::{ClientError, Result};
use crate::state::AppState;

fn reception_writer(state: &Arc<Mutex<AppState>>) -> Result<WriteCoordinator> {
    let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::Reception)?;
    guard.writer()
}

/// Give `id` the discriminating prefix of its kind, assigning a fresh
/// prefixed id when empty.  A foreign prefix is rejected: the document
/// would classify into another kind's bucket on the next snapshot.
fn ensure_prefix(id: &mut String, prefix: &str) -> Result<()> {
    if id.is_empty() {
        *id = prefixed_id(prefix);
        return Ok(());
    }
    if !id.starts_with(prefix) {
        return Err(ClientError::Invalid(format!(
            "Reception id '{id}' must start with '{prefix}'"
        )));
    }
    Ok(())
}

/// Persist a list of shift log entries.
pub async fn update_logs(state: &Arc<Mutex<AppState>>, mut logs: Vec<LogEntry>) -> Result<usize> {
    let writer = reception_writer(state)?;
    for log in &mut logs {
        ensure_prefix(&mut log.id, PREFIX_LOG)?;
    }
    let accepted = writer.write_all(COLLECTION_RECEPTION, &logs).await;
    info!(accepted, total = logs.len(), "Shift logs dispatched");
    Ok(accepted)
}

/// Persist a list of wake-up calls.
pub async fn update_wakeups(
    state: &Arc<Mutex<AppState>>,
    mut wakeups: Vec<WakeUpCall>,
) -> Result<usize> {
    let writer = reception_writer(state)?;
    for wk in &mut wakeups {
        ensure_prefix(&mut wk.id, PREFIX_WAKEUP)?;
    }
    Ok(writer.write_all(COLLECTION_RECEPTION, &wakeups).await)
}

/// Persist a list of taxi bookings.
pub async fn update_taxis(
    state: &Arc<Mutex<AppState>>,
    mut taxis: Vec<TaxiBooking>,
) -> Result<usize> {
    let writer = reception_writer(state)?;
    for taxi in &mut taxis {
        ensure_prefix(&mut taxi.id, PREFIX_TAXI)?;
    }
    Ok(writer.write_all(COLLECTION_RECEPTION, &taxis).await)
}

/// Persist a list of lost-and-found records.
pub async fn update_lost_items(
    state: &Arc<Mutex<AppState>>,
    mut items: Vec<LostItem>,
) -> Result<usize> {
    let writer = reception_writer(state)?;
    for item in &mut items {
        ensure_prefix(&mut item.id, PREFIX_LOST_ITEM)?;
    }
    Ok(writer.write_all(COLLECTION_RECEPTION, &items).await)
}

/// Mark a wake-up call completed and re-persist it.
pub async fn complete_wakeup(state: &Arc<Mutex<AppState>>, id: &str) -> Result<()> {
    let (writer, mut wakeup) = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Reception)?;
        let wakeup = guard
            .view
            .wakeups
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| ClientError::Invalid(format!("Unknown wake-up call: {id}")))?;
        (guard.writer()?, wakeup)
    };

    wakeup.completed = true;
    writer.write(COLLECTION_RECEPTION, &wakeup).await?;
    Ok(())
}

/// Delete a reception document of any kind by id.
pub async fn delete_reception_doc(state: &Arc<Mutex<AppState>>, id: &str) -> Result<()> {
    let writer = reception_writer(state)?;
    writer.remove(COLLECTION_RECEPTION, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_prefix_assigns_and_validates() {
        let mut id = String::new();
        ensure_prefix(&mut id, PREFIX_WAKEUP).unwrap();
        assert!(id.starts_with("wk-"));

        let mut wrong = "tx-123".to_string();
        assert!(ensure_prefix(&mut wrong, PREFIX_WAKEUP).is_err());
    }
}
