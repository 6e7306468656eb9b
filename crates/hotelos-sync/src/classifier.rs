//! Document classification for shared collections that mix entity kinds.
//!
//! Each multi-kind collection gets one sum type with named variants and an
//! explicit discriminator function returning the variant tag; call sites
//! never probe fields themselves.  Classification is deterministic, order
//! preserving within each output bucket, and side-effect free.
//!
//! A document that matches no discriminator rule, or that fails entity
//! decoding, is dropped from every bucket and logged.  Upstream writers are
//! expected to always set a matching discriminator, so the drop is graceful
//! degradation, not an error path.

use std::collections::BTreeMap;

use hotelos_shared::constants::{
    PREFIX_LEAD, PREFIX_LOG, PREFIX_LOST_ITEM, PREFIX_TAXI, PREFIX_WAKEUP, TYPE_DOC_CLIENT,
    TYPE_DOC_FIELD,
};
use hotelos_shared::entities::{
    Client, Group, Lead, LogEntry, LostItem, MaintenanceContract, MaintenanceTicket,
    MonthlyInventory, TaxiBooking, WakeUpCall,
};

use crate::document::{decode, doc_id};
use crate::remote::RawDocument;

// ---------------------------------------------------------------------------
// Maintenance: tickets vs provider contracts
// ---------------------------------------------------------------------------

/// The two kinds sharing the maintenance collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceKind {
    Ticket,
    Contract,
}

/// A maintenance document is a contract iff `providerName` is present and
/// non-empty; everything else is a ticket.
pub fn maintenance_kind(doc: &RawDocument) -> MaintenanceKind {
    match doc.get("providerName").and_then(|v| v.as_str()) {
        Some(name) if !name.is_empty() => MaintenanceKind::Contract,
        _ => MaintenanceKind::Ticket,
    }
}

/// Classified contents of one maintenance snapshot.
#[derive(Debug, Default)]
pub struct MaintenancePartition {
    pub tickets: Vec<MaintenanceTicket>,
    pub contracts: Vec<MaintenanceContract>,
}

pub fn classify_maintenance(docs: &[RawDocument]) -> MaintenancePartition {
    let mut out = MaintenancePartition::default();
    for doc in docs {
        match maintenance_kind(doc) {
            MaintenanceKind::Ticket => {
                if let Some(t) = decode(hotelos_shared::constants::COLLECTION_MAINTENANCE, doc) {
                    out.tickets.push(t);
                }
            }
            MaintenanceKind::Contract => {
                if let Some(c) = decode(hotelos_shared::constants::COLLECTION_MAINTENANCE, doc) {
                    out.contracts.push(c);
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Reception: four kinds discriminated by id prefix
// ---------------------------------------------------------------------------

/// The four kinds sharing the reception collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceptionKind {
    Log,
    WakeUp,
    Taxi,
    LostItem,
}

/// Discriminate a reception document by its id prefix.  `None` means the
/// prefix is unrecognized and the document belongs to no bucket.
pub fn reception_kind(doc: &RawDocument) -> Option<ReceptionKind> {
    let id = doc_id(doc)?;
    if id.starts_with(PREFIX_LOG) {
        Some(ReceptionKind::Log)
    } else if id.starts_with(PREFIX_WAKEUP) {
        Some(ReceptionKind::WakeUp)
    } else if id.starts_with(PREFIX_TAXI) {
        Some(ReceptionKind::Taxi)
    } else if id.starts_with(PREFIX_LOST_ITEM) {
        Some(ReceptionKind::LostItem)
    } else {
        None
    }
}

/// Classified contents of one reception snapshot.
#[derive(Debug, Default)]
pub struct ReceptionPartition {
    pub logs: Vec<LogEntry>,
    pub wakeups: Vec<WakeUpCall>,
    pub taxis: Vec<TaxiBooking>,
    pub lost_items: Vec<LostItem>,
}

pub fn classify_reception(docs: &[RawDocument]) -> ReceptionPartition {
    let collection = hotelos_shared::constants::COLLECTION_RECEPTION;
    let mut out = ReceptionPartition::default();
    for doc in docs {
        match reception_kind(doc) {
            Some(ReceptionKind::Log) => {
                if let Some(l) = decode(collection, doc) {
                    out.logs.push(l);
                }
            }
            Some(ReceptionKind::WakeUp) => {
                if let Some(w) = decode(collection, doc) {
                    out.wakeups.push(w);
                }
            }
            Some(ReceptionKind::Taxi) => {
                if let Some(t) = decode(collection, doc) {
                    out.taxis.push(t);
                }
            }
            Some(ReceptionKind::LostItem) => {
                if let Some(li) = decode(collection, doc) {
                    out.lost_items.push(li);
                }
            }
            None => {
                tracing::debug!(
                    id = doc_id(doc).unwrap_or("<none>"),
                    "dropping reception document with unrecognized id prefix"
                );
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Groups: clients, leads, and groups in one collection
// ---------------------------------------------------------------------------

/// The three kinds sharing the groups collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupsKind {
    Client,
    Lead,
    Group,
}

/// Discriminate a groups-collection document.
///
/// The explicit `type_doc == "client"` marker wins, then the `lead-` id
/// prefix; everything else defaults to a group booking.
pub fn groups_kind(doc: &RawDocument) -> GroupsKind {
    if doc.get(TYPE_DOC_FIELD).and_then(|v| v.as_str()) == Some(TYPE_DOC_CLIENT) {
        return GroupsKind::Client;
    }
    if doc_id(doc).is_some_and(|id| id.starts_with(PREFIX_LEAD)) {
        return GroupsKind::Lead;
    }
    GroupsKind::Group
}

/// Classified contents of one groups snapshot.
#[derive(Debug, Default)]
pub struct GroupsPartition {
    pub groups: Vec<Group>,
    pub leads: Vec<Lead>,
    pub clients: Vec<Client>,
}

pub fn classify_groups(docs: &[RawDocument]) -> GroupsPartition {
    let collection = hotelos_shared::constants::COLLECTION_GROUPS;
    let mut out = GroupsPartition::default();
    for doc in docs {
        match groups_kind(doc) {
            GroupsKind::Client => {
                if let Some(c) = decode(collection, doc) {
                    out.clients.push(c);
                }
            }
            GroupsKind::Lead => {
                if let Some(l) = decode(collection, doc) {
                    out.leads.push(l);
                }
            }
            GroupsKind::Group => {
                if let Some(g) = decode(collection, doc) {
                    out.groups.push(g);
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Inventory: fold into a monthId-keyed mapping
// ---------------------------------------------------------------------------

/// Reduce inventory documents into a `monthId`-keyed map.  Two documents
/// with the same month collapse to one, the later in iteration order wins.
pub fn fold_inventory(docs: &[RawDocument]) -> BTreeMap<String, MonthlyInventory> {
    let collection = hotelos_shared::constants::COLLECTION_INVENTORY;
    let mut out = BTreeMap::new();
    for doc in docs {
        if let Some(inv) = decode::<MonthlyInventory>(collection, doc) {
            out.insert(inv.month_id.clone(), inv);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ticket(id: &str) -> RawDocument {
        json!({
            "id": id,
            "location": "Chambres",
            "description": "Fuite robinet",
            "status": "open",
            "createdAt": "2026-08-01T08:00:00Z"
        })
    }

    fn contract(id: &str, provider: &str) -> RawDocument {
        json!({
            "id": id,
            "providerName": provider,
            "subject": "Chaudière",
            "contactPhone": "0140000000",
            "contactEmail": "sav@chauffage.example",
            "status": "active"
        })
    }

    #[test]
    fn test_maintenance_partition_by_provider_name() {
        let docs = vec![ticket("m1"), contract("m2", "Chauffage SA"), ticket("m3")];
        let p = classify_maintenance(&docs);
        assert_eq!(p.tickets.len(), 2);
        assert_eq!(p.contracts.len(), 1);
        // No document lands in both buckets.
        assert!(p.tickets.iter().all(|t| t.id != "m2"));
        // Input order preserved within each bucket.
        assert_eq!(p.tickets[0].id, "m1");
        assert_eq!(p.tickets[1].id, "m3");
    }

    #[test]
    fn test_empty_provider_name_is_a_ticket() {
        let doc = json!({
            "id": "m4",
            "providerName": "",
            "location": "Hall",
            "description": "Ampoule grillée",
            "status": "open",
            "createdAt": "2026-08-01T08:00:00Z"
        });
        assert_eq!(maintenance_kind(&doc), MaintenanceKind::Ticket);
    }

    #[test]
    fn test_reception_prefixes_are_exhaustive() {
        let docs = vec![
            json!({"id": "log-1", "author": "Nuit", "message": "RAS", "priority": "info",
                   "target": "all", "status": "active", "timestamp": "2026-08-01T06:00:00Z"}),
            json!({"id": "wk-1", "roomNumber": "204", "time": "06:45"}),
            json!({"id": "tx-1", "guestName": "M. Leroy", "time": "09:00",
                   "destination": "CDG", "company": "G7"}),
            json!({"id": "li-1", "description": "Parapluie", "location": "Hall",
                   "dateFound": "2026-07-30", "finder": "Réception", "status": "stored"}),
            // Unrecognized prefix: excluded from every bucket.
            json!({"id": "zz-1", "whatever": true}),
        ];
        let p = classify_reception(&docs);
        let classified = p.logs.len() + p.wakeups.len() + p.taxis.len() + p.lost_items.len();
        assert_eq!(classified, 4);
    }

    #[test]
    fn test_groups_marker_wins_over_prefix() {
        // A client marker on a lead-prefixed id still classifies as client.
        let doc = json!({
            "id": "lead-9",
            "type_doc": "client",
            "name": "Acme",
            "type": "Entreprise",
            "email": "a@acme.fr",
            "phone": "01",
            "address": "Paris",
            "createdAt": "2026-08-01T08:00:00Z"
        });
        assert_eq!(groups_kind(&doc), GroupsKind::Client);
    }

    #[test]
    fn test_groups_partition_defaults_to_group() {
        let docs = vec![
            json!({"id": "g-1", "name": "Séminaire", "category": "Séminaire",
                   "status": "confirmed", "startDate": "2026-09-01", "endDate": "2026-09-03",
                   "nights": 2, "pax": 12}),
            json!({"id": "lead-1", "groupName": "Mariage", "contactName": "C. Durand",
                   "email": "c@d.fr", "phone": "06", "requestDate": "2026-07-01",
                   "pax": 80, "note": "", "status": "nouveau"}),
            json!({"id": "cl-1", "type_doc": "client", "name": "Acme", "type": "Entreprise",
                   "email": "a@acme.fr", "phone": "01", "address": "Paris",
                   "createdAt": "2026-08-01T08:00:00Z"}),
        ];
        let p = classify_groups(&docs);
        assert_eq!(p.groups.len(), 1);
        assert_eq!(p.leads.len(), 1);
        assert_eq!(p.clients.len(), 1);
    }

    #[test]
    fn test_inventory_fold_last_wins() {
        let may_open = json!({"id": "inv-1", "monthId": "2024-05", "status": "open", "items": []});
        let may_closed = json!({"id": "inv-2", "monthId": "2024-05", "status": "closed",
                                "items": [], "closedAt": "2024-06-01T00:00:00Z"});
        let folded = fold_inventory(&[may_open, may_closed]);
        assert_eq!(folded.len(), 1);
        assert_eq!(
            folded["2024-05"].status,
            hotelos_shared::entities::InventoryStatus::Closed
        );
    }
}
