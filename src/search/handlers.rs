use super::engine::{timed_search, SearchAlgorithm, SearchOutcome};
use super::types::{SearchParams, SearchResponse};
use crate::dataset::store::DatasetStore;
use crate::error::ValidationError;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::NaiveDateTime;
use std::sync::Arc;

const NOT_FOUND_MESSAGE: &str = "Data tidak ditemukan";

pub async fn handle_search(
    query: Result<Query<SearchParams>, QueryRejection>,
    Extension(store): Extension<Arc<DatasetStore>>,
) -> Result<(StatusCode, Json<SearchResponse>), ValidationError> {
    let Query(params) = query.map_err(|rejection| {
        tracing::warn!("[INVALID] Malformed search query: {}", rejection.body_text());
        ValidationError::InvalidKey(rejection.body_text())
    })?;
    let key = parse_key(params.npm.as_deref())?;
    let algorithm = SearchAlgorithm::from_token(params.algo.as_deref());

    let snapshot = store.snapshot();
    let outcome = timed_search(algorithm, &snapshot.dataset, key);

    tracing::info!(
        "{}",
        search_log_line(
            chrono::Local::now().naive_local(),
            key,
            algorithm,
            snapshot.dataset.len(),
            &outcome
        )
    );

    Ok((
        StatusCode::OK,
        Json(build_response(algorithm, snapshot.dataset.len(), outcome)),
    ))
}

pub fn parse_key(raw: Option<&str>) -> Result<i64, ValidationError> {
    let raw = match raw {
        Some(raw) => raw,
        None => {
            tracing::warn!("[INVALID] Search request without 'npm'");
            return Err(ValidationError::MissingKey);
        }
    };

    raw.trim().parse::<i64>().map_err(|_| {
        tracing::warn!("[INVALID] NPM is not a number: {}", raw);
        ValidationError::InvalidKey(raw.to_string())
    })
}

pub fn build_response(
    algorithm: SearchAlgorithm,
    dataset_size: usize,
    outcome: SearchOutcome,
) -> SearchResponse {
    match outcome.record {
        Some(record) => SearchResponse {
            found: true,
            npm: Some(record.key),
            nama: Some(record.name),
            jurusan: Some(record.category),
            error: None,
            algo: algorithm.display_name().to_string(),
            waktu_microdetik: outcome.elapsed_micros,
            ukuran_data: dataset_size,
        },
        None => SearchResponse {
            found: false,
            npm: None,
            nama: None,
            jurusan: None,
            error: Some(NOT_FOUND_MESSAGE.to_string()),
            algo: algorithm.label().to_string(),
            waktu_microdetik: outcome.elapsed_micros,
            ukuran_data: dataset_size,
        },
    }
}

/// Operational log line for one search: timestamp (ms), key, algorithm, size, time, outcome.
pub fn search_log_line(
    at: NaiveDateTime,
    key: i64,
    algorithm: SearchAlgorithm,
    dataset_size: usize,
    outcome: &SearchOutcome,
) -> String {
    let status = if outcome.found() {
        "Ditemukan"
    } else {
        "Tidak ditemukan"
    };

    format!(
        "[{}] Cari NPM={} | Algoritma={} | Ukuran Data={} | Waktu={} µs | Hasil={}",
        at.format("%Y-%m-%d %H:%M:%S%.3f"),
        key,
        algorithm.label(),
        dataset_size,
        outcome.elapsed_micros,
        status
    )
}
