//! Append-only local log of successful uploads.
//!
//! The log is newest-first and is rewritten to the durable store after every
//! append, so the in-memory and persisted copies never diverge within one
//! running instance. Loading is tolerant: a missing key or malformed payload
//! degrades to an empty history and is never surfaced to the user.

use serde::{Deserialize, Serialize};

/// Fixed durable key. The serialized field names (`name`/`rows`/`date`) are a
/// storage-layer contract; renaming them invalidates previously persisted
/// history, which the tolerant parse then silently drops.
pub const HISTORY_KEY: &str = "datacon.upload_history";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "name")]
    pub file_name: String,
    #[serde(rename = "rows")]
    pub row_count: u64,
    #[serde(rename = "date")]
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new<T: Into<String>>(file_name: T, row_count: u64, timestamp: T) -> Self {
        Self {
            file_name: file_name.into(),
            row_count,
            timestamp: timestamp.into(),
        }
    }
}

/// Raw access to one durable slot. Saves are best effort; a failed write is
/// logged in debug builds and otherwise ignored.
pub trait HistoryStore {
    fn load_raw(&self) -> Option<String>;
    fn save_raw(&mut self, payload: &str);
}

/// In-memory store, used by tests and as a fallback when no platform store is
/// available.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl HistoryStore for MemoryStore {
    fn load_raw(&self) -> Option<String> {
        self.slot.clone()
    }

    fn save_raw(&mut self, payload: &str) {
        self.slot = Some(payload.to_string());
    }
}

#[derive(Debug, Clone)]
pub struct HistoryLog<S: HistoryStore> {
    entries: Vec<HistoryEntry>,
    store: S,
}

impl<S: HistoryStore> HistoryLog<S> {
    /// Read the persisted sequence once at startup.
    pub fn load(store: S) -> Self {
        let entries = store
            .load_raw()
            .map(|raw| parse_entries(&raw))
            .unwrap_or_default();
        Self { entries, store }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend the entry and rewrite the durable copy.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        match serde_json::to_string(&self.entries) {
            Ok(payload) => self.store.save_raw(&payload),
            Err(_err) => {
                #[cfg(debug_assertions)]
                println!("[history] failed to serialize history: {_err}");
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_entries(raw: &str) -> Vec<HistoryEntry> {
    // Individually malformed records are dropped; a wholly malformed payload
    // degrades to an empty history.
    match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        Ok(values) => values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect(),
        Err(_err) => {
            #[cfg(debug_assertions)]
            println!("[history] discarding unreadable history payload: {_err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_of_absent_key_is_empty() {
        let log = HistoryLog::load(MemoryStore::new());
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_payload_degrades_to_empty() {
        let mut store = MemoryStore::new();
        store.save_raw("not json at all");
        let log = HistoryLog::load(store);
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_records_are_dropped_individually() {
        let mut store = MemoryStore::new();
        store.save_raw(r#"[{"name":"a.csv","rows":3,"date":"d"},{"rows":"oops"}]"#);
        let log = HistoryLog::load(store);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].file_name, "a.csv");
    }
}
