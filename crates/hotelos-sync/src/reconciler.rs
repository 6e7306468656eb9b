//! The in-memory view model and the reconciliation of remote snapshots
//! into it.
//!
//! Reconciliation is replacement, not merging: every incoming snapshot is
//! authoritative and complete for its collection, so each kind's slice is
//! replaced wholesale with the classified contents (one assignment per
//! slice; readers never observe a half-replaced list).  Kinds that take
//! local-only edits between snapshots — chat channels — have no live
//! subscription at all, so a stale snapshot can never clobber an in-flight
//! local append.

use std::collections::BTreeMap;

use tracing::warn;

use hotelos_shared::constants::{
    COLLECTION_AGENDA, COLLECTION_CONTACTS, COLLECTION_GROUPS, COLLECTION_INVENTORY,
    COLLECTION_MAINTENANCE, COLLECTION_RECEPTION, COLLECTION_ROOMS, COLLECTION_SPA,
    COLLECTION_TASKS,
};
use hotelos_shared::entities::*;

use crate::classifier;
use crate::document::{decode_all, dedup_last_wins};
use crate::remote::RawDocument;

/// Everything the UI renders, one slice per entity kind.
///
/// Mutated only by the session's event loop (snapshots) and by command
/// handlers (local edits to cache-only kinds).
#[derive(Debug, Default)]
pub struct ViewModel {
    // Live-subscribed kinds.
    pub rooms: Vec<Room>,
    pub tickets: Vec<MaintenanceTicket>,
    pub contracts: Vec<MaintenanceContract>,
    pub inventory: BTreeMap<String, MonthlyInventory>,
    pub logs: Vec<LogEntry>,
    pub wakeups: Vec<WakeUpCall>,
    pub taxis: Vec<TaxiBooking>,
    pub lost_items: Vec<LostItem>,
    pub groups: Vec<Group>,
    pub leads: Vec<Lead>,
    pub clients: Vec<Client>,
    pub spa_requests: Vec<SpaRequest>,
    pub tasks: Vec<Task>,
    pub events: Vec<CalendarEvent>,
    pub contacts: Vec<Contact>,

    // Cache-only kinds, never touched by snapshots.
    pub channels: Vec<ChatChannel>,
    pub catalog: Vec<CatalogItem>,
    pub venues: Vec<Venue>,
    pub business_config: BusinessConfig,
    pub ratio_items: Vec<RatioItem>,
    pub ratio_categories: Vec<String>,
    pub recipes: Vec<Recipe>,
    pub laundry_issues: Vec<LaundryIssue>,
    pub inbox: Vec<InboxItem>,
    pub settings: UserSettings,
}

impl ViewModel {
    /// Reconcile one snapshot into the matching slices.
    ///
    /// Duplicate ids within the snapshot resolve last-write-wins before
    /// classification.  Reconciling the same snapshot twice is idempotent.
    pub fn apply_snapshot(&mut self, collection: &str, docs: Vec<RawDocument>) {
        let docs = dedup_last_wins(docs);
        match collection {
            COLLECTION_ROOMS => self.rooms = decode_all(collection, &docs),
            COLLECTION_MAINTENANCE => {
                let p = classifier::classify_maintenance(&docs);
                self.tickets = p.tickets;
                self.contracts = p.contracts;
            }
            COLLECTION_INVENTORY => self.inventory = classifier::fold_inventory(&docs),
            COLLECTION_RECEPTION => {
                let p = classifier::classify_reception(&docs);
                self.logs = p.logs;
                self.wakeups = p.wakeups;
                self.taxis = p.taxis;
                self.lost_items = p.lost_items;
            }
            COLLECTION_GROUPS => {
                let p = classifier::classify_groups(&docs);
                self.groups = p.groups;
                self.leads = p.leads;
                self.clients = p.clients;
            }
            COLLECTION_SPA => self.spa_requests = decode_all(collection, &docs),
            COLLECTION_TASKS => self.tasks = decode_all(collection, &docs),
            COLLECTION_AGENDA => self.events = decode_all(collection, &docs),
            COLLECTION_CONTACTS => self.contacts = decode_all(collection, &docs),
            other => warn!(collection = other, "snapshot for unknown collection ignored"),
        }
    }

    /// Append a message to a channel, derive `lastMessage`/`lastUpdate`
    /// from it, and restore descending `lastUpdate` order over the channel
    /// list.  Returns `false` when the channel does not exist.
    pub fn append_message(&mut self, channel_id: &str, message: ChatMessage) -> bool {
        let Some(channel) = self.channels.iter_mut().find(|c| c.id == channel_id) else {
            return false;
        };

        channel.last_message = Some(if message.text.is_empty() {
            match &message.attachments {
                Some(a) if !a.is_empty() => "Pièce jointe".to_string(),
                _ => String::new(),
            }
        } else {
            message.text.clone()
        });
        channel.last_update = message.timestamp;
        channel.messages.push(message);

        self.channels
            .sort_by(|a, b| b.last_update.cmp(&a.last_update));
        true
    }

    /// Clear a channel's unread counter.
    pub fn mark_channel_read(&mut self, channel_id: &str) {
        if let Some(channel) = self.channels.iter_mut().find(|c| c.id == channel_id) {
            channel.unread_count = 0;
        }
    }

    /// Sum of unread counters across all channels.
    pub fn total_unread(&self) -> u32 {
        self.channels.iter().map(|c| c.unread_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use serde_json::json;

    fn room_doc(id: &str) -> RawDocument {
        json!({
            "id": id,
            "number": "101",
            "floor": 1,
            "type": "double",
            "statusFront": "arrival",
            "statusHK": "in_progress"
        })
    }

    fn channel(id: &str, last_update: DateTime<Utc>) -> ChatChannel {
        ChatChannel {
            id: id.to_string(),
            kind: ChannelKind::Group,
            name: id.to_string(),
            participants: Vec::new(),
            messages: Vec::new(),
            unread_count: 0,
            last_update,
            is_online: None,
            last_message: None,
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_snapshot_replaces_slice_wholesale() {
        let mut vm = ViewModel {
            rooms: vec![
                Room {
                    id: "seed-1".to_string(),
                    number: "001".to_string(),
                    floor: 0,
                    kind: "double".to_string(),
                    status_front: RoomStatusFront::Vacant,
                    status_hk: RoomStatusHk::Ready,
                },
                Room {
                    id: "seed-2".to_string(),
                    number: "002".to_string(),
                    floor: 0,
                    kind: "double".to_string(),
                    status_front: RoomStatusFront::Vacant,
                    status_hk: RoomStatusHk::Ready,
                },
            ],
            ..ViewModel::default()
        };

        vm.apply_snapshot(COLLECTION_ROOMS, vec![room_doc("room-101")]);
        assert_eq!(vm.rooms.len(), 1);
        assert_eq!(vm.rooms[0].id, "room-101");
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let docs = vec![room_doc("room-101"), room_doc("room-102")];
        let mut vm = ViewModel::default();

        vm.apply_snapshot(COLLECTION_ROOMS, docs.clone());
        let first = vm.rooms.clone();
        vm.apply_snapshot(COLLECTION_ROOMS, docs);
        assert_eq!(vm.rooms, first);
    }

    #[test]
    fn test_maintenance_snapshot_fills_both_slices() {
        let docs = vec![
            json!({"id": "m1", "location": "Hall", "description": "x", "status": "open",
                   "createdAt": "2026-08-01T08:00:00Z"}),
            json!({"id": "m2", "providerName": "Otis", "subject": "Ascenseur",
                   "contactPhone": "01", "contactEmail": "a@b.c", "status": "active"}),
        ];
        let mut vm = ViewModel::default();
        vm.apply_snapshot(COLLECTION_MAINTENANCE, docs);
        assert_eq!(vm.tickets.len(), 1);
        assert_eq!(vm.contracts.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_resolve_last_wins() {
        let docs = vec![
            json!({"id": "inv", "monthId": "2024-05", "status": "open", "items": []}),
            json!({"id": "inv", "monthId": "2024-05", "status": "closed", "items": []}),
        ];
        let mut vm = ViewModel::default();
        vm.apply_snapshot(COLLECTION_INVENTORY, docs);
        assert_eq!(vm.inventory.len(), 1);
        assert_eq!(vm.inventory["2024-05"].status, InventoryStatus::Closed);
    }

    #[test]
    fn test_append_message_reorders_channels() {
        let mut vm = ViewModel {
            channels: vec![channel("c3", at(300)), channel("c2", at(200)), channel("c1", at(100))],
            ..ViewModel::default()
        };

        let appended = vm.append_message(
            "c1",
            ChatMessage {
                id: "m1".to_string(),
                sender_id: "U".to_string(),
                sender_name: "U".to_string(),
                text: "on est à jour ?".to_string(),
                timestamp: at(400),
                is_system: None,
                attachments: None,
                reactions: None,
            },
        );
        assert!(appended);

        let order: Vec<&str> = vm.channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["c1", "c3", "c2"]);
        assert_eq!(vm.channels[0].last_message.as_deref(), Some("on est à jour ?"));
        assert_eq!(vm.channels[0].last_update, at(400));
    }

    #[test]
    fn test_append_attachment_only_message() {
        let mut vm = ViewModel {
            channels: vec![channel("c1", at(100))],
            ..ViewModel::default()
        };
        vm.append_message(
            "c1",
            ChatMessage {
                id: "m1".to_string(),
                sender_id: "U".to_string(),
                sender_name: "U".to_string(),
                text: String::new(),
                timestamp: at(200),
                is_system: None,
                attachments: Some(vec![Attachment {
                    id: "a1".to_string(),
                    name: "plan.pdf".to_string(),
                    kind: "application/pdf".to_string(),
                    url: "blob:plan".to_string(),
                }]),
                reactions: None,
            },
        );
        assert_eq!(vm.channels[0].last_message.as_deref(), Some("Pièce jointe"));
    }

    #[test]
    fn test_append_to_unknown_channel_is_noop() {
        let mut vm = ViewModel::default();
        let appended = vm.append_message(
            "missing",
            ChatMessage {
                id: "m1".to_string(),
                sender_id: "U".to_string(),
                sender_name: "U".to_string(),
                text: "x".to_string(),
                timestamp: at(1),
                is_system: None,
                attachments: None,
                reactions: None,
            },
        );
        assert!(!appended);
    }
}
