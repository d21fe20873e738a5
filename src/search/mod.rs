//! Search Service Module
//!
//! Looks up a single record by its numeric key in the current dataset.
//!
//! ## Overview
//! Every request works on its own snapshot of the dataset, so a regenerate
//! running in parallel never changes the data a search is looking at.
//! Two interchangeable strategies are available:
//! - **Linear**: scans from the first record. O(N).
//! - **Binary**: recursive halving over the key-sorted dataset. O(log N).
//!
//! Both return identical results for any key on the same dataset.
//!
//! ## Submodules
//! - **`engine`**: The search algorithms, algorithm selection and timing.
//! - **`handlers`**: HTTP handler, parameter validation and the operational log line.
//! - **`types`**: Endpoint path and DTOs.

pub mod engine;
pub mod handlers;
pub mod types;
