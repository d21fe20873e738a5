//! Dataset API Protocol
//!
//! Endpoint paths and DTOs for the regenerate endpoint.

use serde::{Deserialize, Serialize};

/// Regenerates the current dataset (`POST ?size=N`).
pub const ENDPOINT_GENERATE: &str = "/api/generate";

/// Query string of a regenerate request.
///
/// `size` is kept as raw text so that a missing or malformed value can be
/// answered with our own error payload instead of the extractor's rejection.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateParams {
    pub size: Option<String>,
}

/// Successful regenerate response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub size: usize,
    /// Time spent generating (and sorting) the new dataset, in microseconds.
    pub generate_time_microdetik: u64,
}
