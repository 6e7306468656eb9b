use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::constants::COLLECTION_CONTACTS;
use hotelos_shared::entities::Contact;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Persist a contact to the user's address book.
pub async fn save_contact(state: &Arc<Mutex<AppState>>, contact: Contact) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        guard.profile()?;
        guard.writer()?
    };

    writer.write(COLLECTION_CONTACTS, &contact).await?;
    info!(contact = %contact.id, "Contact saved");
    Ok(())
}

/// Delete a contact by id.
pub async fn delete_contact(state: &Arc<Mutex<AppState>>, id: &str) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        guard.writer()?
    };
    writer.remove(COLLECTION_CONTACTS, id).await?;
    info!(contact = %id, "Contact deleted");
    Ok(())
}
