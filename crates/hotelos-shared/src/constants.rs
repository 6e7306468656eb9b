//! Wire-level names shared by every crate: remote collection ids, the id
//! prefixes used for document-kind discrimination, and stamped field names.

/// Shared collection holding room documents (one kind, no discriminator).
pub const COLLECTION_ROOMS: &str = "rooms";

/// Shared collection mixing maintenance tickets and provider contracts.
pub const COLLECTION_MAINTENANCE: &str = "maintenance";

/// Shared collection of monthly inventory documents keyed by `monthId`.
pub const COLLECTION_INVENTORY: &str = "inventory";

/// Shared collection mixing the four reception kinds (log entries, wake-up
/// calls, taxi bookings, lost items), discriminated by id prefix.
pub const COLLECTION_RECEPTION: &str = "reception";

/// Shared collection mixing groups, leads, and clients.
pub const COLLECTION_GROUPS: &str = "groups";

/// Shared collection holding spa requests (one kind, no discriminator).
pub const COLLECTION_SPA: &str = "spa";

/// User-scoped collection of tasks.
pub const COLLECTION_TASKS: &str = "tasks";

/// User-scoped collection of calendar events.
pub const COLLECTION_AGENDA: &str = "agenda";

/// User-scoped collection of contacts.
pub const COLLECTION_CONTACTS: &str = "contacts";

/// Id prefix marking a reception document as a log entry.
pub const PREFIX_LOG: &str = "log-";

/// Id prefix marking a reception document as a wake-up call.
pub const PREFIX_WAKEUP: &str = "wk-";

/// Id prefix marking a reception document as a taxi booking.
pub const PREFIX_TAXI: &str = "tx-";

/// Id prefix marking a reception document as a lost item.
pub const PREFIX_LOST_ITEM: &str = "li-";

/// Id prefix marking a groups-collection document as a lead.
pub const PREFIX_LEAD: &str = "lead-";

/// Ownership stamp written onto user-scoped documents at dispatch time.
/// A document missing this field never appears in its owner's snapshots.
pub const OWNER_FIELD: &str = "ownerId";

/// Explicit type marker in the groups collection.
pub const TYPE_DOC_FIELD: &str = "type_doc";

/// `type_doc` value marking a groups-collection document as a client record.
pub const TYPE_DOC_CLIENT: &str = "client";

/// Every document's primary key field.
pub const ID_FIELD: &str = "id";
