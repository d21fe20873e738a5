//! Static front-end served from the configured public directory.

use crate::config::ServerConfig;

use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

pub async fn handle_static(
    Extension(config): Extension<Arc<ServerConfig>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let Some(path) = resolve_asset_path(&config.public_dir, uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(e) => {
            tracing::debug!("Static asset {} not served: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Maps a request path onto a file below `root`.
///
/// `/` and directory-style paths resolve to `index.html`. Anything that
/// would escape `root` yields `None`.
pub fn resolve_asset_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let mut resolved = root.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if relative.is_empty() || relative.ends_with('/') {
        resolved.push("index.html");
    }

    Some(resolved)
}

pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
