use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::constants::COLLECTION_MAINTENANCE;
use hotelos_shared::entities::{MaintenanceContract, MaintenanceTicket};
use hotelos_sync::{check, Capability};

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Apply a ticket board update: optimistic local replacement, then one
/// independent write per ticket.
pub async fn update_tickets(
    state: &Arc<Mutex<AppState>>,
    tickets: Vec<MaintenanceTicket>,
) -> Result<usize> {
    let writer = {
        let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Maintenance)?;
        guard.view.tickets = tickets.clone();
        guard.writer()?
    };

    let accepted = writer.write_all(COLLECTION_MAINTENANCE, &tickets).await;
    info!(accepted, total = tickets.len(), "Tickets dispatched");
    Ok(accepted)
}

/// Persist a provider contract.
///
/// The provider name is the discriminator that keeps the document out of
/// the ticket bucket, so a contract without one is rejected here rather
/// than silently re-classifying on the next snapshot.
pub async fn save_contract(
    state: &Arc<Mutex<AppState>>,
    contract: MaintenanceContract,
) -> Result<()> {
    if contract.provider_name.is_empty() {
        return Err(ClientError::Invalid(
            "Contract must carry a provider name".to_string(),
        ));
    }

    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Maintenance)?;
        guard.writer()?
    };

    writer.write(COLLECTION_MAINTENANCE, &contract).await?;
    info!(contract = %contract.id, "Contract saved");
    Ok(())
}

/// Delete a maintenance document (ticket or contract) by id.
pub async fn delete_maintenance_doc(state: &Arc<Mutex<AppState>>, id: &str) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Maintenance)?;
        guard.writer()?
    };
    writer.remove(COLLECTION_MAINTENANCE, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelos_shared::entities::ContractStatus;

    #[tokio::test]
    async fn contract_without_provider_is_rejected() {
        let state = Arc::new(Mutex::new(AppState::new()));
        let contract = MaintenanceContract {
            id: "c1".to_string(),
            provider_name: String::new(),
            subject: "Chaudière".to_string(),
            contact_phone: String::new(),
            contact_email: String::new(),
            status: ContractStatus::Active,
            last_intervention: None,
            next_intervention: None,
            address: None,
            website: None,
            siret: None,
            sales_contact: None,
            technical_contact: None,
            start_date: None,
            end_date: None,
            frequency: None,
            annual_cost: None,
        };
        let err = save_contract(&state, contract).await.unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
    }
}
