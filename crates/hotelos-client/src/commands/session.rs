//! Session lifecycle: sign-in seeds the view model, sign-out tears down
//! every live subscription before another identity may open its own.

use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::permissions::UserProfile;

use crate::error::{ClientError, Result};
use crate::events::*;
use crate::state::AppState;

/// Sign a profile in: any previous session is torn down first, then the
/// view model is seeded from the cache (falling back to built-in defaults).
///
/// Live subscriptions are opened separately by
/// [`crate::bridge::start_sync_and_bridge`] once the caller has configured
/// the remote channel.
pub fn sign_in(state: &Arc<Mutex<AppState>>, profile: UserProfile) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;

    // A stale identity's subscriptions must never deliver into this
    // session: teardown completes before the new profile is installed.
    if let Some(mut subscriptions) = guard.subscriptions.take() {
        subscriptions.teardown();
    }
    guard.writer = None;

    let uid = profile.uid.clone();
    guard.profile = Some(profile);
    guard.seed_view_from_cache()?;

    info!(user = %uid, "Signed in");
    if let Some(ref notifier) = guard.notifier {
        notifier.emit(
            EVENT_SESSION_STARTED,
            SessionPayload {
                uid: uid.to_string(),
            },
        );
    }
    Ok(())
}

/// Sign the current profile out and tear down its subscriptions.
pub fn sign_out(state: &Arc<Mutex<AppState>>) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;

    if let Some(mut subscriptions) = guard.subscriptions.take() {
        subscriptions.teardown();
    }
    guard.writer = None;

    let Some(profile) = guard.profile.take() else {
        return Ok(());
    };

    info!(user = %profile.uid, "Signed out");
    if let Some(ref notifier) = guard.notifier {
        notifier.emit(
            EVENT_SESSION_ENDED,
            SessionPayload {
                uid: profile.uid.to_string(),
            },
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelos_shared::permissions::{Role, UserPermissions};
    use hotelos_shared::types::UserId;
    use hotelos_store::CacheDb;

    fn profile(uid: &str) -> UserProfile {
        UserProfile {
            uid: UserId::from(uid),
            email: format!("{uid}@hotel.example"),
            display_name: uid.to_string(),
            role: Role::Staff,
            permissions: UserPermissions::for_role(Role::Staff),
            created_at: 0,
        }
    }

    #[test]
    fn sign_in_then_out() {
        let state = Arc::new(Mutex::new(AppState::new()));
        state.lock().unwrap().cache = Some(CacheDb::open_in_memory().unwrap());

        sign_in(&state, profile("U")).unwrap();
        assert!(state.lock().unwrap().profile.is_some());
        assert!(!state.lock().unwrap().view.rooms.is_empty());

        sign_out(&state).unwrap();
        assert!(state.lock().unwrap().profile.is_none());
        // Signing out twice is harmless.
        sign_out(&state).unwrap();
    }

    #[test]
    fn sign_in_without_cache_fails() {
        let state = Arc::new(Mutex::new(AppState::new()));
        assert!(matches!(
            sign_in(&state, profile("U")),
            Err(ClientError::CacheNotOpen)
        ));
    }
}
