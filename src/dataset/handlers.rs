use super::generator::{generate_dataset, is_valid_size};
use super::protocol::{GenerateParams, GenerateResponse};
use super::store::DatasetStore;
use crate::error::ValidationError;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use std::time::Instant;

pub async fn handle_generate(
    query: Result<Query<GenerateParams>, QueryRejection>,
    Extension(store): Extension<Arc<DatasetStore>>,
) -> Result<(StatusCode, Json<GenerateResponse>), ValidationError> {
    let Query(params) = query.map_err(|rejection| {
        tracing::warn!("[INVALID] Malformed generate query: {}", rejection.body_text());
        ValidationError::InvalidSize(rejection.body_text())
    })?;
    let size = parse_size(params.size.as_deref())?;

    let start = Instant::now();
    let dataset = generate_dataset(size);
    let generate_time = start.elapsed().as_micros() as u64;

    let version = store.replace(dataset);

    tracing::info!(
        "[GENERATE] New dataset: {} records | Time: {} µs | Version: {}",
        size,
        generate_time,
        version
    );

    Ok((
        StatusCode::OK,
        Json(GenerateResponse {
            success: true,
            size,
            generate_time_microdetik: generate_time,
        }),
    ))
}

pub fn parse_size(raw: Option<&str>) -> Result<usize, ValidationError> {
    let raw = match raw {
        Some(raw) => raw,
        None => {
            tracing::warn!("[INVALID] Generate request without 'size'");
            return Err(ValidationError::MissingSize);
        }
    };

    match raw.trim().parse::<usize>() {
        Ok(size) if is_valid_size(size) => Ok(size),
        _ => {
            tracing::warn!("[INVALID] Size out of range or not a number: {}", raw);
            Err(ValidationError::InvalidSize(raw.to_string()))
        }
    }
}
