use serde::{Deserialize, Serialize};

/// A single dataset entry.
///
/// Records are immutable once generated; a regenerate replaces the whole
/// `Dataset` rather than editing records in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique numeric key, the only searchable field.
    pub key: i64,
    pub name: String,
    pub category: String,
}

/// An ordered sequence of records, sorted ascending by `key`.
///
/// The only way to build one is through [`Dataset::from_records`], which
/// sorts its input, so binary search can always rely on the ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|record| record.key);
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
