//! Recent-input list: most recent first, no duplicates, bounded length.

use crate::config::{HISTORY_CAPACITY, HISTORY_PREVIEW_LEN};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::convert::Infallible;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild from entries listed most recent first, keeping first occurrences.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for entry in entries {
            let entry = entry.into();
            if history.entries.len() == history.capacity {
                break;
            }
            if !entry.trim().is_empty() && !history.entries.contains(&entry) {
                history.entries.push_back(entry);
            }
        }
        history
    }

    /// Move `raw` (trimmed) to the front, dropping any older equal entry and
    /// anything beyond capacity. Blank input is ignored.
    pub fn record(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        self.entries.retain(|e| e != raw);
        self.entries.push_front(raw.to_owned());
        self.entries.truncate(self.capacity);
    }

    pub fn get(&self, i: usize) -> Option<&str> {
        self.entries.get(i).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl From<Vec<String>> for History {
    fn from(entries: Vec<String>) -> Self {
        History::from_entries(entries)
    }
}

impl From<History> for Vec<String> {
    fn from(history: History) -> Self {
        history.entries.into()
    }
}

/// First `max` characters of `entry`, with `...` appended when cut.
pub fn preview(entry: &str, max: usize) -> Cow<'_, str> {
    match entry.char_indices().nth(max) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &entry[..cut])),
        None => Cow::Borrowed(entry),
    }
}

/// [`preview`] with the default listing width.
pub fn default_preview(entry: &str) -> Cow<'_, str> {
    preview(entry, HISTORY_PREVIEW_LEN)
}

/// Where a [`History`] lives between runs.
pub trait HistoryStore {
    type Error;

    fn load(&self) -> Result<History, Self::Error>;
    fn save(&mut self, history: &History) -> Result<(), Self::Error>;

    /// Load, record `raw`, save. Returns the updated history.
    fn record(&mut self, raw: &str) -> Result<History, Self::Error> {
        let mut history = self.load()?;
        history.record(raw);
        self.save(&history)?;
        Ok(history)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.save(&History::new())
    }
}

/// Store kept in process memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    history: History,
}

impl HistoryStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> Result<History, Infallible> {
        Ok(self.history.clone())
    }

    fn save(&mut self, history: &History) -> Result<(), Infallible> {
        self.history = history.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(h: &History) -> Vec<&str> {
        h.iter().collect()
    }

    #[test]
    fn most_recent_first() {
        let mut h = History::new();
        h.record("AAA");
        h.record("CCC");
        assert_eq!(entries(&h), vec!["CCC", "AAA"]);
    }

    #[test]
    fn duplicate_moves_to_front() {
        let mut h = History::new();
        h.record("AAA");
        h.record("CCC");
        h.record("AAA");
        assert_eq!(entries(&h), vec!["AAA", "CCC"]);
    }

    #[test]
    fn capped_at_ten() {
        let mut h = History::new();
        for i in 0..15 {
            h.record(&format!("SEQ{i}"));
        }
        assert_eq!(h.len(), 10);
        assert_eq!(h.get(0), Some("SEQ14"));
        assert_eq!(h.get(9), Some("SEQ5"));
        assert_eq!(h.get(10), None);
    }

    #[test]
    fn input_is_trimmed_and_blank_ignored() {
        let mut h = History::new();
        h.record("  atg  ");
        h.record("   ");
        assert_eq!(entries(&h), vec!["atg"]);
    }

    #[test]
    fn raw_text_is_kept_verbatim() {
        let mut h = History::new();
        h.record("atg");
        h.record("ATG");
        assert_eq!(entries(&h), vec!["ATG", "atg"]);
    }

    #[test]
    fn from_entries_applies_policy() {
        let h = History::from_entries(
            ["A", "B", "A", "", "C", "D", "E", "F", "G", "H", "I", "J", "K"].iter().copied(),
        );
        assert_eq!(h.len(), 10);
        assert_eq!(entries(&h)[..3], ["A", "B", "C"]);
        assert_eq!(h.get(9), Some("J"));
    }

    #[test]
    fn zero_capacity_is_raised() {
        let mut h = History::with_capacity(0);
        h.record("A");
        h.record("B");
        assert_eq!(entries(&h), vec!["B"]);
    }

    #[test]
    fn preview_truncates_by_chars() {
        assert_eq!(preview("ACGT", 50), "ACGT");
        let long = "A".repeat(60);
        assert_eq!(default_preview(&long), format!("{}...", "A".repeat(50)));
        assert_eq!(preview("ACGT", 4), "ACGT");
        assert_eq!(preview("ACGTA", 4), "ACGT...");
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        store.record("ATG").unwrap();
        let h = store.record("GGG").unwrap();
        assert_eq!(entries(&h), vec!["GGG", "ATG"]);
        assert_eq!(store.load().unwrap(), h);
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
