//! Helpers over raw remote documents.
//!
//! A raw document is an untyped JSON record with a string `id`; everything
//! else is kind-specific.  Decoding into entity structs happens here so that
//! the drop-on-failure policy lives in one place: a document that does not
//! decode is excluded from every bucket and logged, never an error.

use serde::de::DeserializeOwned;

use hotelos_shared::constants::{ID_FIELD, OWNER_FIELD};

use crate::remote::RawDocument;

/// The document's `id`, if present and a string.
pub fn doc_id(doc: &RawDocument) -> Option<&str> {
    doc.get(ID_FIELD).and_then(|v| v.as_str())
}

/// The document's ownership stamp, if present and a string.
pub fn owner_id(doc: &RawDocument) -> Option<&str> {
    doc.get(OWNER_FIELD).and_then(|v| v.as_str())
}

/// Enforce id uniqueness within one snapshot: on duplicate ids the later
/// document wins, keeping the position of the first occurrence.  Documents
/// without an id are dropped.
pub fn dedup_last_wins(docs: Vec<RawDocument>) -> Vec<RawDocument> {
    let mut out: Vec<RawDocument> = Vec::with_capacity(docs.len());
    let mut index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for doc in docs {
        let Some(id) = doc_id(&doc) else {
            tracing::debug!("dropping document without id");
            continue;
        };
        match index.get(id) {
            Some(&at) => out[at] = doc,
            None => {
                index.insert(id.to_string(), out.len());
                out.push(doc);
            }
        }
    }
    out
}

/// Decode one raw document into `T`, dropping (and logging) on failure.
pub fn decode<T: DeserializeOwned>(collection: &str, doc: &RawDocument) -> Option<T> {
    match serde_json::from_value(doc.clone()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(
                collection,
                id = doc_id(doc).unwrap_or("<none>"),
                error = %e,
                "dropping undecodable document"
            );
            None
        }
    }
}

/// Decode a whole snapshot, dropping undecodable documents, order preserved.
pub fn decode_all<T: DeserializeOwned>(collection: &str, docs: &[RawDocument]) -> Vec<T> {
    docs.iter().filter_map(|d| decode(collection, d)).collect()
}
