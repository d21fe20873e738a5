//! Dataset Store
//!
//! Holds the single "current" dataset shared by every request.
//!
//! ## Concurrency
//! - **Replace**: a fully built `Dataset` is swapped in as one step while the
//!   slot lock is held. Readers never see a partially built dataset.
//! - **Snapshot**: readers clone the `Arc` out of the slot and release the
//!   lock immediately. A later replace does not affect a snapshot already taken;
//!   the old dataset is dropped when its last reader finishes.
//!
//! Generation and search both run outside the lock, so the critical section
//! only ever covers a pointer swap or an `Arc` clone.

use super::types::Dataset;

use parking_lot::Mutex;
use std::sync::Arc;

struct Slot {
    dataset: Arc<Dataset>,
    version: u64,
}

/// A reader's private, point-in-time view of the store.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub dataset: Arc<Dataset>,
    /// Number of replacements applied before this snapshot was taken.
    pub version: u64,
}

pub struct DatasetStore {
    slot: Mutex<Slot>,
}

impl DatasetStore {
    pub fn new(initial: Dataset) -> Arc<Self> {
        Arc::new(Self {
            slot: Mutex::new(Slot {
                dataset: Arc::new(initial),
                version: 0,
            }),
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        let slot = self.slot.lock();
        Snapshot {
            dataset: slot.dataset.clone(),
            version: slot.version,
        }
    }

    /// Publishes `dataset` as the new current dataset and returns its version.
    pub fn replace(&self, dataset: Dataset) -> u64 {
        let dataset = Arc::new(dataset);
        let (previous, version) = {
            let mut slot = self.slot.lock();
            slot.version += 1;
            (std::mem::replace(&mut slot.dataset, dataset), slot.version)
        };
        // Released outside the lock; frees the old records if no reader holds them.
        drop(previous);
        version
    }

    pub fn len(&self) -> usize {
        self.slot.lock().dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.slot.lock().version
    }
}
