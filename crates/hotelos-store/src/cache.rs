//! Typed `load`/`save` over the `cache` key/value table.
//!
//! `load` never fails: a missing row, a broken connection, or a malformed
//! stored payload all fall back to the caller-supplied default.  A corrupt
//! cache entry must never prevent application startup; the remote store is
//! the durable source of truth and will reconcile.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::CacheDb;
use crate::error::Result;

impl CacheDb {
    /// Load the value stored under `key`, or `fallback` if the key is absent
    /// or its payload does not parse as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let row: std::result::Result<Option<String>, rusqlite::Error> = self
            .conn()
            .query_row(
                "SELECT value FROM cache WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional();

        let raw = match row {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, using fallback");
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed cache entry, using fallback");
                fallback
            }
        }
    }

    /// Serialize `value` as JSON and upsert it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.conn().execute(
            "INSERT INTO cache (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, raw, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Delete the entry under `key`.  Returns `true` if a row was deleted.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM cache WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use hotelos_shared::entities::{CalendarEvent, EventKind, Room};
    use rusqlite::params;

    use crate::defaults;
    use crate::keys;

    #[test]
    fn save_load_round_trip() {
        let db = CacheDb::open_in_memory().unwrap();
        let rooms = defaults::rooms();

        db.save(keys::ROOMS, &rooms).unwrap();
        let loaded: Vec<Room> = db.load(keys::ROOMS, Vec::new());
        assert_eq!(loaded, rooms);
    }

    #[test]
    fn load_missing_key_returns_fallback() {
        let db = CacheDb::open_in_memory().unwrap();
        let loaded: Vec<Room> = db.load(keys::ROOMS, defaults::rooms());
        assert_eq!(loaded, defaults::rooms());
    }

    #[test]
    fn load_malformed_entry_returns_fallback() {
        let db = CacheDb::open_in_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO cache (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![keys::ROOMS, "{not json", "2024-01-01T00:00:00Z"],
            )
            .unwrap();

        let loaded: Vec<Room> = db.load(keys::ROOMS, defaults::rooms());
        assert_eq!(loaded, defaults::rooms());
    }

    #[test]
    fn load_revives_event_dates() {
        // Events cached by an older app version carried epoch-seconds
        // wrappers instead of ISO strings.
        let db = CacheDb::open_in_memory().unwrap();
        let raw = serde_json::json!([{
            "id": "ev-1",
            "title": "Réunion chefs de service",
            "start": { "seconds": 1_715_506_200 },
            "time": "09:30",
            "duration": "1h",
            "type": "pro"
        }]);
        db.conn()
            .execute(
                "INSERT INTO cache (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![keys::EVENTS, raw.to_string(), "2024-01-01T00:00:00Z"],
            )
            .unwrap();

        let events: Vec<CalendarEvent> = db.load(keys::EVENTS, Vec::new());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Pro);
        assert_eq!(
            events[0].start,
            DateTime::from_timestamp(1_715_506_200, 0).unwrap()
        );
    }

    #[test]
    fn remove_deletes_entry() {
        let db = CacheDb::open_in_memory().unwrap();
        db.save(keys::SETTINGS, &defaults::settings()).unwrap();
        assert!(db.remove(keys::SETTINGS).unwrap());
        assert!(!db.remove(keys::SETTINGS).unwrap());
    }
}
