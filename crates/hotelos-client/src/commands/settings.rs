use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::entities::{BusinessConfig, CatalogItem, UserSettings, Venue};
use hotelos_store::keys;
use hotelos_sync::{check, Capability};

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Current user settings.
pub fn get_settings(state: &Arc<Mutex<AppState>>) -> Result<UserSettings> {
    let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    Ok(guard.view.settings.clone())
}

/// Replace the user settings and persist them.
pub fn update_settings(state: &Arc<Mutex<AppState>>, settings: UserSettings) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::SettingsManagement)?;

    guard.view.settings = settings;
    let settings = guard.view.settings.clone();
    guard.cache()?.save(keys::SETTINGS, &settings)?;
    info!("Settings updated");
    Ok(())
}

/// Replace the business configuration.
pub fn update_business_config(state: &Arc<Mutex<AppState>>, config: BusinessConfig) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::SettingsManagement)?;

    guard.view.business_config = config;
    let config = guard.view.business_config.clone();
    guard.cache()?.save(keys::BUSINESS_CONFIG, &config)?;
    Ok(())
}

/// Replace the sellable catalog.
pub fn update_catalog(state: &Arc<Mutex<AppState>>, catalog: Vec<CatalogItem>) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::SettingsManagement)?;

    guard.view.catalog = catalog;
    let catalog = guard.view.catalog.clone();
    guard.cache()?.save(keys::CATALOG, &catalog)?;
    Ok(())
}

/// Replace the venue list.
pub fn update_venues(state: &Arc<Mutex<AppState>>, venues: Vec<Venue>) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::SettingsManagement)?;

    guard.view.venues = venues;
    let venues = guard.view.venues.clone();
    guard.cache()?.save(keys::VENUES, &venues)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelos_shared::permissions::{Role, UserPermissions, UserProfile};
    use hotelos_shared::types::UserId;
    use hotelos_store::CacheDb;

    fn state_with_role(role: Role) -> Arc<Mutex<AppState>> {
        let state = Arc::new(Mutex::new(AppState::new()));
        {
            let mut guard = state.lock().unwrap();
            guard.cache = Some(CacheDb::open_in_memory().unwrap());
            guard.profile = Some(UserProfile {
                uid: UserId::from("U"),
                email: "u@hotel.example".to_string(),
                display_name: "U".to_string(),
                role,
                permissions: UserPermissions::for_role(role),
                created_at: 0,
            });
            guard.seed_view_from_cache().unwrap();
        }
        state
    }

    #[test]
    fn staff_cannot_update_settings() {
        let state = state_with_role(Role::Staff);
        let err = update_settings(&state, UserSettings::default()).unwrap_err();
        assert_eq!(err.to_string(), "Accès restreint aux Administrateurs.");
    }

    #[test]
    fn admin_update_persists() {
        let state = state_with_role(Role::Admin);
        let mut settings = UserSettings::default();
        settings.dark_mode = true;
        update_settings(&state, settings).unwrap();

        let guard = state.lock().unwrap();
        let cached: UserSettings = guard
            .cache()
            .unwrap()
            .load(keys::SETTINGS, UserSettings::default());
        assert!(cached.dark_mode);
    }
}
