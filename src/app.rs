use crate::assets::handle_static;
use crate::config::ServerConfig;
use crate::dataset::handlers::handle_generate;
use crate::dataset::protocol::ENDPOINT_GENERATE;
use crate::dataset::store::DatasetStore;
use crate::search::handlers::handle_search;
use crate::search::types::ENDPOINT_SEARCH;

use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;

/// Assembles the HTTP API plus the static front-end fallback.
pub fn router(store: Arc<DatasetStore>, config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route(ENDPOINT_GENERATE, post(handle_generate))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .fallback(handle_static)
        .layer(Extension(store))
        .layer(Extension(config))
}
