//! Dataset Module
//!
//! Owns the record collection that searches run against.
//!
//! ## Lifecycle
//! 1. **Generate**: `generator` builds a deterministic, key-sorted dataset.
//! 2. **Publish**: `DatasetStore::replace` swaps it in as the current dataset.
//! 3. **Read**: searches take a `Snapshot` and keep using it even if a newer
//!    dataset is published meanwhile.
//!
//! ## Submodules
//! - **`types`**: `Record` and the always-sorted `Dataset`.
//! - **`generator`**: Dataset construction and size bounds.
//! - **`store`**: The shared current-dataset slot.
//! - **`handlers`**: HTTP handler for the regenerate endpoint.
//! - **`protocol`**: Endpoint paths and DTOs.

pub mod generator;
pub mod handlers;
pub mod protocol;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
