use crate::dataset::types::{Dataset, Record};
use std::time::Instant;

/// The two supported lookup strategies.
///
/// Selected by the request's `type` token: `"binary"` picks [`Binary`],
/// anything else (including no token at all) picks [`Linear`].
///
/// [`Binary`]: SearchAlgorithm::Binary
/// [`Linear`]: SearchAlgorithm::Linear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
}

impl SearchAlgorithm {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("binary") => Self::Binary,
            _ => Self::Linear,
        }
    }

    /// Short label used in the operational log and not-found responses.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Iteratif",
            Self::Binary => "Rekursif",
        }
    }

    /// Long label used in found responses.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Linear => "Iteratif (Linear Search)",
            Self::Binary => "Rekursif (Binary Search)",
        }
    }

    /// Returns the index of the record with `key`, if any.
    pub fn find(&self, records: &[Record], key: i64) -> Option<usize> {
        match self {
            Self::Linear => linear_search(records, key),
            Self::Binary => binary_search(records, key),
        }
    }
}

/// Result of one timed lookup against a dataset.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub record: Option<Record>,
    pub elapsed_micros: u64,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.record.is_some()
    }
}

/// Runs `algorithm` over `dataset`, timing only the lookup itself.
pub fn timed_search(algorithm: SearchAlgorithm, dataset: &Dataset, key: i64) -> SearchOutcome {
    let start = Instant::now();
    let index = algorithm.find(dataset.records(), key);
    let elapsed_micros = start.elapsed().as_micros() as u64;

    SearchOutcome {
        record: index.and_then(|i| dataset.get(i)).cloned(),
        elapsed_micros,
    }
}

pub fn linear_search(records: &[Record], key: i64) -> Option<usize> {
    records.iter().position(|record| record.key == key)
}

/// Recursive binary search. `records` must be sorted ascending by key.
pub fn binary_search(records: &[Record], key: i64) -> Option<usize> {
    binary_search_between(records, 0, records.len() as isize - 1, key)
}

// Inclusive bounds; an empty range (`lo > hi`) means not found.
fn binary_search_between(records: &[Record], lo: isize, hi: isize, key: i64) -> Option<usize> {
    if lo > hi {
        return None;
    }

    let mid = lo + (hi - lo) / 2;
    let candidate = records[mid as usize].key;

    if candidate == key {
        Some(mid as usize)
    } else if candidate < key {
        binary_search_between(records, mid + 1, hi, key)
    } else {
        binary_search_between(records, lo, mid - 1, key)
    }
}
