//! Versioned cache keys, one per entity kind.
//!
//! The version suffix is the payload-schema migration mechanism: when a
//! kind's cached shape changes incompatibly, bump its key and the next load
//! falls back to defaults instead of choking on the old payload.

pub const CONTACTS: &str = "hotelos_contacts_v3";
pub const TODOS: &str = "hotelos_todos_v3";
pub const GROUPS: &str = "hotelos_groups_v3";
pub const EVENTS: &str = "hotelos_events_v3";
pub const SETTINGS: &str = "hotelos_settings_v3";
pub const CHANNELS: &str = "hotelos_channels_v1";
pub const BUSINESS_CONFIG: &str = "hotelos_business_v1";
pub const CATALOG: &str = "hotelos_catalog_v1";
pub const VENUES: &str = "hotelos_venues_v1";
pub const CLIENTS: &str = "hotelos_clients_v1";
pub const INVENTORY: &str = "hotelos_inventory_v1";
pub const RECIPES: &str = "hotelos_recipes_v1";
pub const RATIO_ITEMS: &str = "hotelos_ratio_items_v1";
pub const RATIO_CATEGORIES: &str = "hotelos_ratio_cats_v1";
pub const ROOMS: &str = "hotelos_rooms_v1";
pub const LAUNDRY: &str = "hotelos_laundry_v1";
pub const TICKETS: &str = "hotelos_tickets_v1";
pub const CONTRACTS: &str = "hotelos_contracts_v1";
pub const LEADS: &str = "hotelos_leads_v1";
pub const INBOX: &str = "hotelos_inbox_v1";
pub const LOGS: &str = "hotelos_logs_v1";
pub const WAKEUPS: &str = "hotelos_wakeups_v1";
pub const TAXIS: &str = "hotelos_taxis_v1";
pub const LOST_ITEMS: &str = "hotelos_lost_items_v1";
pub const SPA_REQUESTS: &str = "hotelos_spa_requests_v1";
