use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::constants::COLLECTION_SPA;
use hotelos_shared::entities::{SpaRefusalReason, SpaRequest, SpaStatus};
use hotelos_sync::{check, Capability, WriteCoordinator};

use crate::error::{ClientError, Result};
use crate::state::AppState;

fn spa_writer(state: &Arc<Mutex<AppState>>) -> Result<WriteCoordinator> {
    let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::Spa)?;
    guard.writer()
}

/// Persist a list of spa requests.
pub async fn update_requests(
    state: &Arc<Mutex<AppState>>,
    requests: Vec<SpaRequest>,
) -> Result<usize> {
    let writer = spa_writer(state)?;
    Ok(writer.write_all(COLLECTION_SPA, &requests).await)
}

fn find_request(state: &Arc<Mutex<AppState>>, id: &str) -> Result<SpaRequest> {
    let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::Spa)?;
    guard
        .view
        .spa_requests
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .ok_or_else(|| ClientError::Invalid(format!("Unknown spa request: {id}")))
}

/// Confirm a pending spa request.
pub async fn confirm_request(state: &Arc<Mutex<AppState>>, id: &str) -> Result<()> {
    let mut request = find_request(state, id)?;
    request.status = SpaStatus::Confirmed;
    request.refusal_reason = None;

    let writer = spa_writer(state)?;
    writer.write(COLLECTION_SPA, &request).await?;
    info!(request = %id, "Spa request confirmed");
    Ok(())
}

/// Refuse a spa request with a named reason.
pub async fn refuse_request(
    state: &Arc<Mutex<AppState>>,
    id: &str,
    reason: SpaRefusalReason,
) -> Result<()> {
    let mut request = find_request(state, id)?;
    request.status = SpaStatus::Refused;
    request.refusal_reason = Some(reason);

    let writer = spa_writer(state)?;
    writer.write(COLLECTION_SPA, &request).await?;
    info!(request = %id, reason = ?reason, "Spa request refused");
    Ok(())
}
