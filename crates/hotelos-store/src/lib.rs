//! # hotelos-store
//!
//! Local cache persistence for the HotelOS client, backed by SQLite.
//!
//! The cache is a versioned key/value table: one key per entity kind, the
//! value a JSON document.  It seeds the view model before any remote
//! snapshot arrives and is the sole source of truth for kinds that never
//! acquire a live subscription (chat channels, catalog, venues, business
//! config, ratio items, recipes, laundry issues, user settings).
//!
//! Schema migration of cached payloads is done by bumping the key name and
//! falling back to defaults; there is no in-place migration logic.

pub mod cache;
pub mod database;
pub mod defaults;
pub mod keys;
pub mod migrations;

mod error;

pub use database::CacheDb;
pub use error::StoreError;
