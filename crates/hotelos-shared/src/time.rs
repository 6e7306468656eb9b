//! Timestamp normalization for fields that arrive in several historical
//! shapes.  Calendar event `start` values have been written as ISO-8601
//! strings, epoch milliseconds, and `{ seconds, nanoseconds }` wrapper
//! objects over the app's lifetime; all of them must revive to a plain
//! `DateTime<Utc>` on load.

/// Serde adapter: `#[serde(with = "hotelos_shared::time::flexible")]`.
pub mod flexible {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    // Values above this are epoch milliseconds, below it epoch seconds.
    // The cutoff (~year 5138 in seconds, ~1973 in millis) is unambiguous
    // for any timestamp this system will ever store.
    const MILLIS_CUTOFF: i64 = 100_000_000_000;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Iso(String),
        Epoch(i64),
        Wrapper {
            seconds: i64,
            #[serde(default)]
            nanoseconds: u32,
        },
    }

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        match Raw::deserialize(de)? {
            Raw::Iso(s) => parse_iso(&s).map_err(D::Error::custom),
            Raw::Epoch(n) if n >= MILLIS_CUTOFF => DateTime::from_timestamp_millis(n)
                .ok_or_else(|| D::Error::custom(format!("epoch millis out of range: {n}"))),
            Raw::Epoch(n) => DateTime::from_timestamp(n, 0)
                .ok_or_else(|| D::Error::custom(format!("epoch seconds out of range: {n}"))),
            Raw::Wrapper {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(seconds, nanoseconds)
                .ok_or_else(|| D::Error::custom(format!("epoch wrapper out of range: {seconds}"))),
        }
    }

    fn parse_iso(s: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        // Date-only values ("2024-05-12") revive to midnight UTC.
        if let Ok(d) = s.parse::<NaiveDate>() {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc());
            }
        }
        Err(format!("unrecognized timestamp: {s:?}"))
    }
}
