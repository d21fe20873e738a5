//! Record Search Service Library
//!
//! An in-memory record collection exposed over HTTP, searchable by key with
//! either a linear scan or a recursive binary search. The whole dataset can be
//! regenerated at runtime while searches are in flight.
//!
//! ## Modules
//! - **`dataset`**: Record types, the deterministic generator and the
//!   `DatasetStore` that publishes the current dataset to concurrent readers.
//! - **`search`**: The two search algorithms, their timing, and the search endpoint.
//! - **`error`**: Validation errors and their HTTP 400 rendering.
//! - **`config`**: Bind address, static asset root and initial dataset size.
//! - **`assets`**: Static front-end serving.
//! - **`app`**: Router assembly.

pub mod app;
pub mod assets;
pub mod config;
pub mod dataset;
pub mod error;
pub mod search;
