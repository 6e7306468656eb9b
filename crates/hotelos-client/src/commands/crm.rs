//! CRM commands: group bookings, leads, clients, and the enquiry inbox.
//!
//! Groups, leads, and clients share one remote collection; the write paths
//! keep the discriminators intact (`lead-` prefixed ids, `type_doc` marker
//! on clients) so that classification routes each document back to its
//! kind.  Inbox items stay cache-local — see DESIGN.md.

use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::constants::{COLLECTION_GROUPS, PREFIX_LEAD};
use hotelos_shared::entities::{Client, Group, InboxItem, Lead};
use hotelos_shared::types::prefixed_id;
use hotelos_store::keys;
use hotelos_sync::{check, Capability};

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Persist a group booking.
pub async fn save_group(state: &Arc<Mutex<AppState>>, group: Group) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::SharedData)?;
        guard.writer()?
    };

    writer.write(COLLECTION_GROUPS, &group).await?;
    info!(group = %group.id, "Group saved");
    Ok(())
}

/// Delete a group booking by id.
pub async fn delete_group(state: &Arc<Mutex<AppState>>, id: &str) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::SharedData)?;
        guard.writer()?
    };
    writer.remove(COLLECTION_GROUPS, id).await?;
    info!(group = %id, "Group deleted");
    Ok(())
}

/// Persist a list of leads, assigning `lead-` prefixed ids where missing.
pub async fn update_leads(state: &Arc<Mutex<AppState>>, mut leads: Vec<Lead>) -> Result<usize> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Crm)?;
        guard.writer()?
    };

    for lead in &mut leads {
        if lead.id.is_empty() {
            lead.id = prefixed_id(PREFIX_LEAD);
        } else if !lead.id.starts_with(PREFIX_LEAD) {
            return Err(ClientError::Invalid(format!(
                "Lead id '{}' must start with '{PREFIX_LEAD}'",
                lead.id
            )));
        }
    }
    Ok(writer.write_all(COLLECTION_GROUPS, &leads).await)
}

/// Create a client record from the CRM flow.  Dispatched to the groups
/// collection with the explicit `type_doc` marker.
pub async fn save_client(state: &Arc<Mutex<AppState>>, client: Client) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Crm)?;
        guard.writer()?
    };

    writer.write_client(&client).await?;
    info!(client = %client.id, "Client saved");
    Ok(())
}

/// Update a client from the client database screen (admin/manager only).
pub async fn update_client(state: &Arc<Mutex<AppState>>, client: Client) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::ClientDatabase)?;
        guard.writer()?
    };

    writer.write_client(&client).await?;
    info!(client = %client.id, "Client updated");
    Ok(())
}

/// Replace the enquiry inbox.  Cache-only.
pub fn update_inbox(state: &Arc<Mutex<AppState>>, inbox: Vec<InboxItem>) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::Crm)?;

    guard.view.inbox = inbox;
    let inbox = guard.view.inbox.clone();
    guard.cache()?.save(keys::INBOX, &inbox)?;
    Ok(())
}
