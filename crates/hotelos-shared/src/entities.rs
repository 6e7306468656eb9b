//! Domain entity structs for every HotelOS module.
//!
//! These mirror the documents stored in the remote collections and the local
//! cache.  Serde renames follow the wire's camelCase convention; a handful of
//! fields keep historical names (`type_doc`, `statusHK`) that predate it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rooms & housekeeping
// ---------------------------------------------------------------------------

/// Front-desk occupancy status of a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatusFront {
    Stayover,
    Departure,
    Arrival,
    Vacant,
}

/// Housekeeping progress status of a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatusHk {
    NotStarted,
    InProgress,
    Ready,
}

/// A hotel room, tracked by both front desk and housekeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    /// Printed room number, kept as text ("101", "101bis").
    pub number: String,
    pub floor: i32,
    /// Room category label (single, twin, suite...).
    #[serde(rename = "type")]
    pub kind: String,
    pub status_front: RoomStatusFront,
    #[serde(rename = "statusHK")]
    pub status_hk: RoomStatusHk,
}

/// A damaged or missing linen report raised by housekeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaundryIssue {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
    pub comment: String,
    pub photo_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Resolved,
}

/// An internal maintenance ticket.  Shares its remote collection with
/// [`MaintenanceContract`]; a ticket is any document without `providerName`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicket {
    pub id: String,
    pub location: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub created_at: DateTime<Utc>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Renew,
    Terminated,
}

/// A named person reachable at a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// A recurring service contract with an external provider.  The presence of
/// a non-empty `providerName` is what classifies the document as a contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceContract {
    pub id: String,
    pub provider_name: String,
    pub subject: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub status: ContractStatus,
    pub last_intervention: Option<String>,
    pub next_intervention: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub siret: Option<String>,
    pub sales_contact: Option<ContactDetails>,
    pub technical_contact: Option<ContactDetails>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub frequency: Option<String>,
    pub annual_cost: Option<f64>,
}

// ---------------------------------------------------------------------------
// F&B inventory
// ---------------------------------------------------------------------------

/// One stocked article inside a monthly inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub packaging: String,
    pub supplier: String,
    pub initial_qty: f64,
    pub initial_unit_cost: f64,
    pub unit_cost: f64,
    pub current_qty: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InventoryStatus {
    Open,
    Closed,
}

/// The full stock sheet for one month.  The remote collection keys these by
/// `monthId` ("2024-05"); two documents with the same month collapse to one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyInventory {
    pub month_id: String,
    pub status: InventoryStatus,
    pub items: Vec<InventoryItem>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// An ingredient line of a recipe sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub id: String,
    pub inventory_item_id: Option<String>,
    pub name: String,
    pub unit: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub supplier: Option<String>,
}

/// A costed recipe sheet (cache-only, no live subscription).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub portions: u32,
    pub target_cost_percent: f64,
    pub vat_rate: f64,
    pub last_updated: String,
    pub ingredients: Vec<RecipeIngredient>,
}

/// A manually costed ratio line for the cost-control sheet (cache-only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatioItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub manual_cost: f64,
    pub target_percent: f64,
    pub vat_rate: f64,
    pub inventory_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Reception
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogPriority {
    Info,
    Important,
    Urgent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    All,
    Management,
    Housekeeping,
    Maintenance,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Active,
    Archived,
}

/// A shift-handover log entry.  Reception document, id prefix `log-`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub author: String,
    pub message: String,
    pub priority: LogPriority,
    pub target: LogTarget,
    pub status: LogStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read_by: Vec<String>,
}

/// A scheduled wake-up call.  Reception document, id prefix `wk-`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WakeUpCall {
    pub id: String,
    pub room_number: String,
    pub time: String,
    #[serde(default)]
    pub completed: bool,
}

/// A taxi booked for a guest.  Reception document, id prefix `tx-`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxiBooking {
    pub id: String,
    pub guest_name: String,
    pub room_number: Option<String>,
    pub time: String,
    pub destination: String,
    pub company: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LostItemStatus {
    Stored,
    Contacted,
    Returned,
    Donated,
}

/// A lost-and-found record.  Reception document, id prefix `li-`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LostItem {
    pub id: String,
    pub description: String,
    pub location: String,
    pub date_found: String,
    pub finder: String,
    pub status: LostItemStatus,
    pub photo_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Groups, leads & clients (CRM)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Option,
    Confirmed,
}

/// Room-type breakdown of a group booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupRooms {
    pub single: u32,
    pub twin: u32,
    pub double: u32,
    pub family: u32,
}

/// Sold options of a group booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupOptions {
    pub je: bool,
    pub demi_je: bool,
    pub dinner: bool,
    pub lunch: bool,
    pub pause: bool,
    pub room_hire: bool,
    pub cocktail: bool,
}

/// One billable line of a group quote or invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub description: String,
    pub setup: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    pub vat_rate: f64,
    pub catalog_id: Option<String>,
}

/// One instalment of a group's payment schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSchedule {
    pub id: String,
    pub label: String,
    pub percentage: f64,
    pub due_date: String,
    pub paid: bool,
}

/// A group booking (seminar, wedding, tour...).  Groups-collection document
/// with neither a `type_doc` marker nor a `lead-` id prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub client_id: Option<String>,
    pub category: String,
    pub status: GroupStatus,
    pub start_date: String,
    pub end_date: String,
    pub nights: u32,
    pub pax: u32,
    #[serde(default)]
    pub rooms: GroupRooms,
    #[serde(default)]
    pub options: GroupOptions,
    pub note: Option<String>,
    pub rm_contact_id: Option<String>,
    pub invoice_items: Option<Vec<InvoiceItem>>,
    pub payment_schedule: Option<Vec<PaymentSchedule>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Nouveau,
    EnCours,
    Valide,
    Perdu,
}

/// Pre-arrival checklist of a validated lead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadChecklist {
    pub room_setup: bool,
    pub menu: bool,
    pub rooming_list: bool,
}

/// An incoming group enquiry.  Groups-collection document, id prefix `lead-`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub group_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub request_date: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub event_date: Option<String>,
    pub pax: u32,
    pub note: String,
    pub status: LeadStatus,
    #[serde(default)]
    pub checklist: LeadChecklist,
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClientType {
    Entreprise,
    Particulier,
}

/// A billing client.  Groups-collection document with `type_doc == "client"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ClientType,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub siret: Option<String>,
    pub company_name: Option<String>,
    pub category: Option<String>,
    pub vat: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An unqualified incoming enquiry (cache-only; see DESIGN.md for why inbox
/// items never enter the groups collection).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InboxItem {
    pub id: String,
    pub contact_name: String,
    pub company_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub request_date: String,
    pub source: InboxSource,
    pub status: InboxStatus,
    pub event_start_date: Option<String>,
    pub event_end_date: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub quote_sent: bool,
    pub last_follow_up: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InboxSource {
    Email,
    Phone,
    Website,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InboxStatus {
    ToProcess,
    Processed,
    Archived,
}

// ---------------------------------------------------------------------------
// Spa
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpaStatus {
    Pending,
    Confirmed,
    Refused,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpaRefusalReason {
    CompletCabine,
    CompletSoin,
    ContreIndication,
    Annulation,
    Autre,
}

/// A treatment booking request at the spa.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpaRequest {
    pub id: String,
    pub client_name: String,
    pub phone: String,
    pub email: String,
    /// Requested day, `YYYY-MM-DD`.
    pub date: String,
    /// Requested slot, `HH:MM`.
    pub time: String,
    pub treatment: String,
    pub status: SpaStatus,
    pub refusal_reason: Option<SpaRefusalReason>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tasks (user-scoped)
// ---------------------------------------------------------------------------

/// A file attached to a task or chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Task progress, kept as the French display labels the wire has always used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "Pas commencé")]
    NotStarted,
    #[serde(rename = "En cours")]
    InProgress,
    #[serde(rename = "Terminé")]
    Done,
}

/// A personal to-do.  User-scoped: only visible inside its owner's
/// subscription, so the write path must stamp `ownerId`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub done: bool,
    pub tag: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub priority: Option<TaskPriority>,
    pub note: Option<String>,
    pub linked_contact_id: Option<String>,
    pub linked_group_id: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
    pub owner_id: Option<String>,
    pub status: TaskStatus,
}

// ---------------------------------------------------------------------------
// Calendar (user-scoped)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Pro,
    Perso,
    Google,
}

/// A calendar event.  The `start` field arrives in several historical shapes
/// (ISO string, epoch-seconds wrapper, epoch millis) and is normalized to a
/// UTC timestamp by [`crate::time::flexible`] on every load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(with = "crate::time::flexible")]
    pub start: DateTime<Utc>,
    pub time: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub linked_contact_id: Option<String>,
    pub video_link: Option<String>,
    pub owner_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Contacts (user-scoped)
// ---------------------------------------------------------------------------

/// A personal address-book contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub category: Option<String>,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub initials: Option<String>,
    pub color: Option<String>,
    pub vip: Option<bool>,
    pub status: Option<String>,
    pub owner_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Messaging (cache-only)
// ---------------------------------------------------------------------------

/// An emoji reaction aggregated over the users who placed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
    pub users: Vec<String>,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_system: Option<bool>,
    pub attachments: Option<Vec<Attachment>>,
    pub reactions: Option<Vec<Reaction>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Group,
    Direct,
}

/// A conversation channel.  Messages are append-only; `lastMessage` and
/// `lastUpdate` are derived from the most recently appended message and the
/// channel list is kept in descending `lastUpdate` order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatChannel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    pub name: String,
    pub participants: Vec<String>,
    pub messages: Vec<ChatMessage>,
    pub unread_count: u32,
    pub last_update: DateTime<Utc>,
    pub is_online: Option<bool>,
    pub last_message: Option<String>,
}

// ---------------------------------------------------------------------------
// Business configuration (cache-only)
// ---------------------------------------------------------------------------

/// A bookable function room or space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A sellable catalog item used to prefill quote lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub default_price: f64,
    pub default_vat: f64,
    pub technical_description: Option<String>,
    pub default_venue_id: Option<String>,
    pub default_start_time: Option<String>,
    pub default_end_time: Option<String>,
}

/// Legal and banking identity printed on quotes and invoices.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessConfig {
    pub company_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub siret: String,
    pub vat_number: String,
    pub bank_name: String,
    pub iban: String,
    pub bic: String,
}

/// Per-user UI preferences (cache-only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub user_name: String,
    pub theme_color: String,
    pub dark_mode: bool,
    pub auto_dark_mode: Option<bool>,
    pub google_sync: Option<bool>,
    pub whatsapp_sync: Option<bool>,
    pub weather_city: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            user_name: "Directeur".to_string(),
            theme_color: "indigo".to_string(),
            dark_mode: false,
            auto_dark_mode: Some(false),
            google_sync: Some(false),
            whatsapp_sync: Some(false),
            weather_city: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_wire_names() {
        let json = serde_json::json!({
            "id": "room-101",
            "number": "101",
            "floor": 1,
            "type": "double",
            "statusFront": "vacant",
            "statusHK": "ready"
        });
        let room: Room = serde_json::from_value(json).unwrap();
        assert_eq!(room.kind, "double");
        assert_eq!(room.status_hk, RoomStatusHk::Ready);

        let back = serde_json::to_value(&room).unwrap();
        assert_eq!(back["statusHK"], "ready");
        assert_eq!(back["type"], "double");
    }

    #[test]
    fn test_task_status_french_labels() {
        let task = serde_json::json!({
            "id": "t1",
            "text": "Vérifier la chaudière",
            "done": false,
            "tag": "Maintenance",
            "status": "En cours"
        });
        let task: Task = serde_json::from_value(task).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(
            serde_json::to_value(TaskStatus::Done).unwrap(),
            serde_json::json!("Terminé")
        );
    }

    #[test]
    fn test_optional_fields_default() {
        // Documents written by older app versions omit most optional fields.
        let lead = serde_json::json!({
            "id": "lead-1",
            "groupName": "Séminaire Acme",
            "contactName": "J. Martin",
            "email": "jm@acme.fr",
            "phone": "0600000000",
            "requestDate": "2024-05-01",
            "pax": 20,
            "note": "",
            "status": "nouveau"
        });
        let lead: Lead = serde_json::from_value(lead).unwrap();
        assert_eq!(lead.status, LeadStatus::Nouveau);
        assert!(!lead.checklist.room_setup);
        assert!(lead.owner_id.is_none());
    }
}
