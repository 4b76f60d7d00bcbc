//! Static asset host for the embedded runtime
//!
//! Serves the built page and the Unity WebGL output: `/unity-builds/{*path}`
//! gets the exact suffix-to-header mapping from [`assets`], any other path
//! is served from the build directory when a file exists there, and
//! unmatched routes fall back to `index.html` so the page router works on
//! deep links.

pub mod assets;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::GatewayError;

#[derive(Debug, Clone)]
struct ServerState {
    build_dir: PathBuf,
}

/// Build the host router over a Unity build directory
pub fn router(build_dir: PathBuf) -> Router {
    let state = Arc::new(ServerState { build_dir });
    Router::new()
        .route("/unity-builds/{*path}", get(unity_asset_handler))
        .fallback(get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the asset host until ctrl-c
pub async fn serve(addr: std::net::SocketAddr, build_dir: PathBuf) -> Result<(), GatewayError> {
    if !build_dir.is_dir() {
        return Err(GatewayError::BuildDirMissing { path: build_dir });
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| GatewayError::Bind { addr, source })?;

    info!(%addr, build_dir = %build_dir.display(), "Asset host listening");
    info!("Runtime assets are served with their compression headers intact");

    let app = router(build_dir);
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Asset host shutting down");
        })
        .await
    {
        warn!("Asset host server error: {e}");
    }
    Ok(())
}

/// Resolve a runtime asset under the build directory and attach the header
/// mapping the loader depends on
async fn unity_asset_handler(
    State(state): State<Arc<ServerState>>,
    UrlPath(path): UrlPath<String>,
) -> Response {
    let base = state.build_dir.join("unity-builds");
    let file_path = base.join(&path);

    // Path traversal guard: the canonical target must stay under the base.
    let canonical = match tokio::fs::canonicalize(&file_path).await {
        Ok(p) => p,
        Err(_) => return (StatusCode::NOT_FOUND, "Not found").into_response(),
    };
    let base_canonical = match tokio::fs::canonicalize(&base).await {
        Ok(p) => p,
        Err(_) => return (StatusCode::NOT_FOUND, "Not found").into_response(),
    };
    if !canonical.starts_with(&base_canonical) {
        warn!(%path, "Asset request escaped the build directory");
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    let contents = match tokio::fs::read(&canonical).await {
        Ok(contents) => contents,
        Err(_) => return (StatusCode::NOT_FOUND, "Not found").into_response(),
    };

    match assets::headers_for(&path) {
        Some(headers) => {
            let mut builder = Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, headers.content_type)
                .header(header::CACHE_CONTROL, headers.cache_control);
            if let Some(encoding) = headers.content_encoding {
                builder = builder.header(header::CONTENT_ENCODING, encoding);
            }
            builder
                .body(Body::from(contents))
                .expect("static header values are valid")
        }
        None => {
            let mime = mime_guess::from_path(&canonical)
                .first_or_octet_stream()
                .to_string();
            ([(header::CONTENT_TYPE, mime)], contents).into_response()
        }
    }
}

/// Serve the rest of the build directory statically, with `index.html` as
/// the fallback for unmatched page routes
async fn page_handler(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    if !path.is_empty() {
        if let Some(response) = try_static_file(&state.build_dir, path).await {
            return response;
        }
    }

    let index = state.build_dir.join("index.html");
    match tokio::fs::read(&index).await {
        Ok(contents) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            contents,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Read a file under the build directory, honoring the traversal guard
///
/// `None` means "no such file" - directories and escaped paths fall through
/// to the index fallback rather than surfacing an error.
async fn try_static_file(build_dir: &Path, path: &str) -> Option<Response> {
    let file_path = build_dir.join(path);
    let canonical = tokio::fs::canonicalize(&file_path).await.ok()?;
    let base_canonical = tokio::fs::canonicalize(build_dir).await.ok()?;
    if !canonical.starts_with(&base_canonical) {
        warn!(path, "Static request escaped the build directory");
        return None;
    }
    if !tokio::fs::metadata(&canonical).await.ok()?.is_file() {
        return None;
    }

    let contents = tokio::fs::read(&canonical).await.ok()?;
    let mime = mime_guess::from_path(&canonical)
        .first_or_octet_stream()
        .to_string();
    Some(([(header::CONTENT_TYPE, mime)], contents).into_response())
}
