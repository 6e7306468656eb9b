//! Application state shared across all command handlers.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` by the embedding
//! shell so that command handlers and the sync bridge can access it.

use tokio::sync::mpsc;

use hotelos_shared::permissions::UserProfile;
use hotelos_store::{defaults, keys, CacheDb};
use hotelos_sync::{RemoteCommand, SubscriptionManager, ViewModel, WriteCoordinator};

use crate::error::{ClientError, Result};
use crate::events::UiNotifier;

/// Central application state.
pub struct AppState {
    /// The signed-in user's profile.
    /// `None` until authentication completes.
    pub profile: Option<UserProfile>,

    /// Handle to the local cache database.
    /// `None` until the cache is opened.
    pub cache: Option<CacheDb>,

    /// Command channel to the remote store task.
    /// `None` when the session runs cache-only (offline shell, tests).
    pub remote_tx: Option<mpsc::Sender<RemoteCommand>>,

    /// Write coordinator stamped with the signed-in user's identity.
    /// Created on sign-in, dropped on sign-out.
    pub writer: Option<WriteCoordinator>,

    /// Live subscriptions of the current session.  Torn down synchronously
    /// on sign-out, before any new identity may subscribe.
    pub subscriptions: Option<SubscriptionManager>,

    /// The view model every screen renders from.
    pub view: ViewModel,

    /// Channel for UI-facing event notifications.
    pub notifier: Option<UiNotifier>,
}

impl AppState {
    /// Create a new, uninitialised application state.
    pub fn new() -> Self {
        Self {
            profile: None,
            cache: None,
            remote_tx: None,
            writer: None,
            subscriptions: None,
            view: ViewModel::default(),
            notifier: None,
        }
    }

    /// The signed-in profile, or [`ClientError::NotSignedIn`].
    pub fn profile(&self) -> Result<&UserProfile> {
        self.profile.as_ref().ok_or(ClientError::NotSignedIn)
    }

    /// The open cache, or [`ClientError::CacheNotOpen`].
    pub fn cache(&self) -> Result<&CacheDb> {
        self.cache.as_ref().ok_or(ClientError::CacheNotOpen)
    }

    /// A clone of the session's write coordinator, or
    /// [`ClientError::RemoteNotConfigured`].
    pub fn writer(&self) -> Result<WriteCoordinator> {
        self.writer.clone().ok_or(ClientError::RemoteNotConfigured)
    }

    /// Seed the view model from the cache, falling back to the built-in
    /// defaults for every kind.  This is the bootstrap state shown before
    /// any remote snapshot arrives.
    pub fn seed_view_from_cache(&mut self) -> Result<()> {
        let cache = self.cache.as_ref().ok_or(ClientError::CacheNotOpen)?;
        let view = &mut self.view;

        view.contacts = cache.load(keys::CONTACTS, defaults::contacts());
        view.clients = cache.load(keys::CLIENTS, defaults::clients());
        view.inventory = cache.load(keys::INVENTORY, defaults::inventory());
        view.recipes = cache.load(keys::RECIPES, defaults::recipes());
        view.ratio_items = cache.load(keys::RATIO_ITEMS, defaults::ratio_items());
        view.ratio_categories = cache.load(keys::RATIO_CATEGORIES, defaults::ratio_categories());
        view.tasks = cache.load(keys::TODOS, defaults::todos());
        view.rooms = cache.load(keys::ROOMS, defaults::rooms());
        view.laundry_issues = cache.load(keys::LAUNDRY, Vec::new());
        view.tickets = cache.load(keys::TICKETS, defaults::tickets());
        view.contracts = cache.load(keys::CONTRACTS, defaults::contracts());
        view.leads = cache.load(keys::LEADS, defaults::leads());
        view.inbox = cache.load(keys::INBOX, Vec::new());
        view.logs = cache.load(keys::LOGS, defaults::logs());
        view.wakeups = cache.load(keys::WAKEUPS, Vec::new());
        view.taxis = cache.load(keys::TAXIS, Vec::new());
        view.lost_items = cache.load(keys::LOST_ITEMS, Vec::new());
        view.spa_requests = cache.load(keys::SPA_REQUESTS, defaults::spa_requests());
        view.groups = cache.load(keys::GROUPS, defaults::groups());
        view.events = cache.load(keys::EVENTS, defaults::events());
        view.channels = cache.load(keys::CHANNELS, defaults::channels());
        view.catalog = cache.load(keys::CATALOG, defaults::catalog());
        view.venues = cache.load(keys::VENUES, defaults::venues());
        view.business_config = cache.load(keys::BUSINESS_CONFIG, defaults::business_config());
        view.settings = cache.load(keys::SETTINGS, defaults::settings());

        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_falls_back_to_defaults_on_empty_cache() {
        let mut state = AppState::new();
        state.cache = Some(CacheDb::open_in_memory().unwrap());

        state.seed_view_from_cache().unwrap();
        assert_eq!(state.view.rooms, defaults::rooms());
        assert_eq!(state.view.channels.len(), 1);
        assert!(state.view.wakeups.is_empty());
    }

    #[test]
    fn seed_without_cache_fails() {
        let mut state = AppState::new();
        assert!(matches!(
            state.seed_view_from_cache(),
            Err(ClientError::CacheNotOpen)
        ));
    }
}
