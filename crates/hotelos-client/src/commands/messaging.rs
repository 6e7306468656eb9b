//! Messaging commands.  Chat channels have no live subscription: every
//! mutation applies to the view model and is persisted straight to the
//! local cache, which is the channels' source of truth.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use hotelos_shared::entities::{Attachment, ChannelKind, ChatChannel, ChatMessage};
use hotelos_shared::types::{doc_id, prefixed_id};
use hotelos_store::keys;
use hotelos_sync::{check, Capability};

use crate::error::{ClientError, Result};
use crate::events::*;
use crate::state::AppState;

/// Append a message to a channel.  Derives `lastMessage`/`lastUpdate`,
/// restores descending `lastUpdate` order, and persists the channel list.
/// Returns the new message's id.
pub fn send_message(
    state: &Arc<Mutex<AppState>>,
    channel_id: &str,
    text: String,
    attachments: Option<Vec<Attachment>>,
) -> Result<String> {
    let (notifier, message) = {
        let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        let (sender_id, sender_name) = {
            let profile = guard.profile()?;
            check(profile, Capability::Messaging)?;
            (profile.uid.to_string(), profile.display_name.clone())
        };

        let message = ChatMessage {
            id: doc_id(),
            sender_id,
            sender_name,
            text,
            timestamp: Utc::now(),
            is_system: None,
            attachments,
            reactions: None,
        };

        if !guard.view.append_message(channel_id, message.clone()) {
            return Err(ClientError::Invalid(format!("Unknown channel: {channel_id}")));
        }

        let channels = guard.view.channels.clone();
        guard.cache()?.save(keys::CHANNELS, &channels)?;
        (guard.notifier.clone(), message)
    };

    info!(msg = %message.id, channel = %channel_id, "Message sent");
    if let Some(notifier) = notifier {
        notifier.emit(
            EVENT_NEW_MESSAGE,
            NewMessagePayload {
                channel_id: channel_id.to_string(),
                sender: message.sender_id.clone(),
                message_id: message.id.clone(),
                timestamp: message.timestamp.to_rfc3339(),
            },
        );
    }
    Ok(message.id)
}

/// Create a channel and persist the updated list.  Returns the new id.
pub fn create_channel(
    state: &Arc<Mutex<AppState>>,
    name: String,
    kind: ChannelKind,
    participants: Vec<String>,
) -> Result<String> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    {
        let profile = guard.profile()?;
        check(profile, Capability::Messaging)?;
    }

    let channel = ChatChannel {
        id: prefixed_id("ch-"),
        kind,
        name,
        participants,
        messages: Vec::new(),
        unread_count: 0,
        last_update: Utc::now(),
        is_online: None,
        last_message: None,
    };
    let id = channel.id.clone();

    guard.view.channels.insert(0, channel);
    let channels = guard.view.channels.clone();
    guard.cache()?.save(keys::CHANNELS, &channels)?;

    info!(channel = %id, "Channel created");
    Ok(id)
}

/// Clear a channel's unread counter and persist.
pub fn mark_channel_read(state: &Arc<Mutex<AppState>>, channel_id: &str) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    guard.profile()?;

    guard.view.mark_channel_read(channel_id);
    let channels = guard.view.channels.clone();
    guard.cache()?.save(keys::CHANNELS, &channels)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelos_shared::permissions::{Role, UserPermissions, UserProfile};
    use hotelos_shared::types::UserId;
    use hotelos_store::CacheDb;

    fn signed_in_state(permissions: UserPermissions) -> Arc<Mutex<AppState>> {
        let state = Arc::new(Mutex::new(AppState::new()));
        {
            let mut guard = state.lock().unwrap();
            guard.cache = Some(CacheDb::open_in_memory().unwrap());
            guard.profile = Some(UserProfile {
                uid: UserId::from("U"),
                email: "u@hotel.example".to_string(),
                display_name: "U".to_string(),
                role: Role::Staff,
                permissions,
                created_at: 0,
            });
            guard.seed_view_from_cache().unwrap();
        }
        state
    }

    #[test]
    fn send_message_appends_and_persists() {
        let state = signed_in_state(UserPermissions::all());
        let channel_id = state.lock().unwrap().view.channels[0].id.clone();

        send_message(&state, &channel_id, "bonjour".to_string(), None).unwrap();

        let guard = state.lock().unwrap();
        assert_eq!(
            guard.view.channels[0].last_message.as_deref(),
            Some("bonjour")
        );
        // Persisted: a fresh load from cache sees the message.
        let cached: Vec<ChatChannel> = guard.cache().unwrap().load(keys::CHANNELS, Vec::new());
        assert!(cached.iter().any(|c| c.id == channel_id
            && c.messages.iter().any(|m| m.text == "bonjour")));
    }

    #[test]
    fn send_message_denied_without_capability() {
        let state = signed_in_state(UserPermissions::none());
        let channel_id = state.lock().unwrap().view.channels[0].id.clone();

        let err = send_message(&state, &channel_id, "x".to_string(), None).unwrap_err();
        assert!(matches!(err, ClientError::Denied(_)));
        assert_eq!(err.to_string(), "Accès Messagerie restreint.");
    }

    #[test]
    fn send_to_unknown_channel_fails() {
        let state = signed_in_state(UserPermissions::all());
        let err = send_message(&state, "missing", "x".to_string(), None).unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
    }
}
