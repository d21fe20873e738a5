//! Dataset Generator
//!
//! Builds a deterministic dataset of a requested size. The caller is expected
//! to have validated `size` against [`MIN_SIZE`]..=[`MAX_SIZE`].

use super::types::{Dataset, Record};

/// Keys are assigned as `KEY_BASE + ordinal`, ordinals starting at 1.
pub const KEY_BASE: i64 = 20_250_000;

pub const MIN_SIZE: usize = 1;
pub const MAX_SIZE: usize = 50_000;
pub const DEFAULT_SIZE: usize = 1_000;

pub const CATEGORIES: [&str; 6] = [
    "Teknik Informatika",
    "Sistem Informasi",
    "Ilmu Komputer",
    "Teknik Komputer",
    "Teknik Elektro",
    "Statistika",
];

pub fn generate_dataset(size: usize) -> Dataset {
    let mut records = Vec::with_capacity(size);

    for ordinal in 1..=size {
        records.push(Record {
            key: KEY_BASE + ordinal as i64,
            name: format!("Record {}", ordinal),
            category: CATEGORIES[ordinal % CATEGORIES.len()].to_string(),
        });
    }

    // Sorting is part of the contract, not a side effect of generation order.
    Dataset::from_records(records)
}

/// Returns true when `size` may be passed to [`generate_dataset`] from a request.
pub fn is_valid_size(size: usize) -> bool {
    (MIN_SIZE..=MAX_SIZE).contains(&size)
}
