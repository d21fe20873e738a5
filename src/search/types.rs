use serde::{Deserialize, Serialize};

/// Looks up a record by key (`GET ?npm=K&type=T`).
pub const ENDPOINT_SEARCH: &str = "/api/cari";

/// Query string of a search request. Both values stay raw text until validated.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub npm: Option<String>,
    #[serde(rename = "type")]
    pub algo: Option<String>,
}

/// Search response, used for both outcomes.
///
/// A hit fills `npm`, `nama` and `jurusan`; a miss fills `error` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npm: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurusan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub algo: String,
    pub waktu_microdetik: u64,
    pub ukuran_data: usize,
}
