use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export::records_to_csv;
use formcap_types::SubmittedRecord;

const SLOT_FILE: &str = "feedbacks.json";

// NOTE: The persisted collection is one JSON array in a single file slot,
// and `append` is a whole-array read-modify-write. Two processes appending
// at once can lose an update. That is an accepted limitation of a
// single-user local tool, kept deliberately instead of growing a locking
// or journaling layer the data volume does not justify.

/// Append-only collection of submitted records, persisted as a single JSON
/// array under the data directory.
pub struct FeedbackStore {
    slot: PathBuf,
}

impl FeedbackStore {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            slot: data_dir.join(SLOT_FILE),
        }
    }

    /// Read the full persisted collection. A missing or unparsable slot
    /// reads as empty rather than failing: the store always starts from a
    /// usable state.
    pub fn load(&self) -> Vec<SubmittedRecord> {
        let Ok(content) = fs::read_to_string(&self.slot) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Append one record: read the collection, push, write the whole array
    /// back.
    pub fn append(&self, record: &SubmittedRecord) -> Result<()> {
        let mut records = self.load();
        records.push(record.clone());

        if let Some(parent) = self.slot.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.slot, serde_json::to_string(&records)?)?;
        Ok(())
    }

    /// The most recent `n` records, oldest first (tail slice of the
    /// collection).
    pub fn recent(&self, n: usize) -> Vec<SubmittedRecord> {
        let records = self.load();
        let skip = records.len().saturating_sub(n);
        records.into_iter().skip(skip).collect()
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }

    /// Irreversibly empty the collection. The affirmative confirmation is
    /// the caller's job. A missing slot is already empty.
    pub fn clear(&self) -> Result<()> {
        if self.slot.exists() {
            fs::remove_file(&self.slot)?;
        }
        Ok(())
    }

    /// Export every record as CSV text. An empty collection yields
    /// `Ok(None)`: the "nothing to export" signal, a valid state rather
    /// than an error.
    pub fn export_csv(&self) -> Result<Option<String>> {
        let records = self.load();
        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(records_to_csv(&records)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcap_types::FieldValue;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn record(name: &str) -> SubmittedRecord {
        let mut values = BTreeMap::new();
        values.insert("name".to_string(), FieldValue::Single(name.to_string()));
        SubmittedRecord::new(values)
    }

    fn name_of(record: &SubmittedRecord) -> String {
        record.display_value("name")
    }

    #[test]
    fn test_append_and_recent_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = FeedbackStore::open(temp_dir.path());

        for i in 0..3 {
            store.append(&record(&format!("user-{}", i))).unwrap();
        }

        let recent = store.recent(10);
        assert_eq!(recent.len(), 3);
        assert_eq!(name_of(&recent[0]), "user-0");
        assert_eq!(name_of(&recent[2]), "user-2");
    }

    #[test]
    fn test_recent_returns_tail_slice() {
        let temp_dir = TempDir::new().unwrap();
        let store = FeedbackStore::open(temp_dir.path());

        for i in 0..15 {
            store.append(&record(&format!("user-{}", i))).unwrap();
        }

        let recent = store.recent(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(name_of(&recent[0]), "user-5");
        assert_eq!(name_of(&recent[9]), "user-14");
    }

    #[test]
    fn test_clear_empties_collection() {
        let temp_dir = TempDir::new().unwrap();
        let store = FeedbackStore::open(temp_dir.path());

        store.append(&record("someone")).unwrap();
        store.clear().unwrap();

        assert!(store.recent(10).is_empty());
        assert_eq!(store.count(), 0);
        assert!(store.export_csv().unwrap().is_none());

        // clearing an already-empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_unparsable_slot_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(SLOT_FILE), "{corrupt").unwrap();

        let store = FeedbackStore::open(temp_dir.path());
        assert!(store.load().is_empty());

        // and the store remains writable
        store.append(&record("fresh")).unwrap();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_export_csv_contains_records() {
        let temp_dir = TempDir::new().unwrap();
        let store = FeedbackStore::open(temp_dir.path());
        store.append(&record("Alice")).unwrap();

        let csv = store.export_csv().unwrap().unwrap();
        assert!(csv.starts_with("\"Date\",\"Name\""));
        assert!(csv.contains("\"Alice\""));
    }
}
