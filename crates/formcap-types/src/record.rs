use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A submitted value for one field key. A repeated key (multi-valued
/// checkbox group) accumulates into `Many`; a single ticked box stays
/// `Single`, matching the browser FormData folding the descriptors were
/// designed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Accumulate another value under the same key.
    pub fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(first) => {
                *self = FieldValue::Many(vec![std::mem::take(first), value]);
            }
            FieldValue::Many(values) => values.push(value),
        }
    }

    pub fn joined(&self, separator: &str) -> String {
        match self {
            FieldValue::Single(value) => value.clone(),
            FieldValue::Many(values) => values.join(separator),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Single(value) => value.trim().is_empty(),
            FieldValue::Many(values) => values.iter().all(|v| v.trim().is_empty()),
        }
    }
}

/// The values captured at submission time plus a timestamp. Immutable once
/// stored; the feedback store owns the persisted collection.
///
/// Serializes flat: field values sit alongside `timestamp` in one JSON
/// object, keyed by field id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub values: BTreeMap<String, FieldValue>,
}

impl SubmittedRecord {
    pub fn new(values: BTreeMap<String, FieldValue>) -> Self {
        Self {
            timestamp: Utc::now(),
            values,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Display text for one field key, multi-values joined with `", "`.
    /// Missing keys render empty.
    pub fn display_value(&self, key: &str) -> String {
        self.get(key).map(|v| v.joined(", ")).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_push_promotes_to_many() {
        let mut value = FieldValue::Single("Dark mode".to_string());
        value.push("Offline".to_string());

        assert_eq!(
            value,
            FieldValue::Many(vec!["Dark mode".to_string(), "Offline".to_string()])
        );

        value.push("Sync".to_string());
        assert_eq!(value.joined(", "), "Dark mode, Offline, Sync");
    }

    #[test]
    fn test_record_serializes_flat() {
        let mut values = BTreeMap::new();
        values.insert("name".to_string(), FieldValue::Single("Alice".to_string()));
        values.insert(
            "features".to_string(),
            FieldValue::Many(vec!["a".to_string(), "b".to_string()]),
        );
        let record = SubmittedRecord::new(values);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["features"][1], "b");
        assert!(json["timestamp"].is_string());

        let back: SubmittedRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.values, record.values);
    }

    #[test]
    fn test_is_blank() {
        assert!(FieldValue::Single("   ".to_string()).is_blank());
        assert!(!FieldValue::Single("x".to_string()).is_blank());
        assert!(FieldValue::Many(vec![]).is_blank());
    }

    #[test]
    fn test_display_value_missing_key_is_empty() {
        let record = SubmittedRecord::new(BTreeMap::new());
        assert_eq!(record.display_value("name"), "");
    }
}
