//! Handler-level checks for the asset host headers

use std::path::Path;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use medahost::server::router;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Lay out a minimal Unity build directory
fn build_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let base = dir.path().join("unity-builds/medashooter/Build");
    std::fs::create_dir_all(&base).expect("build tree");
    for name in [
        "medashooter.loader.js",
        "medashooter.framework.js.gz",
        "medashooter.data.gz",
        "medashooter.wasm.gzip",
    ] {
        std::fs::write(base.join(name), b"payload").expect("asset file");
    }
    std::fs::write(dir.path().join("index.html"), b"<html></html>").expect("index");
    dir
}

async fn get(dir: &Path, uri: &str) -> axum::response::Response {
    router(dir.to_path_buf())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn header_value<'r>(response: &'r axum::response::Response, name: header::HeaderName) -> Option<&'r str> {
    response.headers().get(name).map(|v| v.to_str().unwrap())
}

#[tokio::test]
async fn framework_bundle_gets_gzip_javascript_headers() {
    let dir = build_dir();
    let response = get(
        dir.path(),
        "/unity-builds/medashooter/Build/medashooter.framework.js.gz",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CONTENT_TYPE),
        Some("text/javascript")
    );
    assert_eq!(
        header_value(&response, header::CONTENT_ENCODING),
        Some("gzip")
    );
    assert_eq!(
        header_value(&response, header::CACHE_CONTROL),
        Some("public, max-age=31536000")
    );
}

#[tokio::test]
async fn data_and_wasm_artifacts_get_octet_stream_gzip_headers() {
    let dir = build_dir();
    for uri in [
        "/unity-builds/medashooter/Build/medashooter.data.gz",
        "/unity-builds/medashooter/Build/medashooter.wasm.gzip",
    ] {
        let response = get(dir.path(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(
            header_value(&response, header::CONTENT_TYPE),
            Some("application/octet-stream"),
            "{uri}"
        );
        assert_eq!(
            header_value(&response, header::CONTENT_ENCODING),
            Some("gzip"),
            "{uri}"
        );
    }
}

#[tokio::test]
async fn loader_script_has_no_encoding_header() {
    let dir = build_dir();
    let response = get(
        dir.path(),
        "/unity-builds/medashooter/Build/medashooter.loader.js",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CONTENT_TYPE),
        Some("application/javascript")
    );
    assert_eq!(header_value(&response, header::CONTENT_ENCODING), None);
}

#[tokio::test]
async fn missing_assets_are_not_found() {
    let dir = build_dir();
    let response = get(dir.path(), "/unity-builds/medashooter/Build/missing.wasm.gz").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn traversal_attempts_do_not_escape_the_build_dir() {
    let dir = build_dir();
    // A secret outside the served subtree.
    std::fs::write(dir.path().join("secret.txt"), b"secret").expect("secret");

    let response = get(dir.path(), "/unity-builds/../secret.txt").await;
    assert_ne!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn page_assets_are_served_from_the_build_dir() {
    let dir = build_dir();
    let css_dir = dir.path().join("static/css");
    std::fs::create_dir_all(&css_dir).expect("static tree");
    std::fs::write(css_dir.join("main.css"), b"body{}").expect("stylesheet");

    let response = get(dir.path(), "/static/css/main.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CONTENT_TYPE),
        Some("text/css")
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"body{}");
}

#[tokio::test]
async fn fallback_requests_cannot_escape_the_build_dir() {
    let dir = TempDir::new().expect("temp dir");
    let build = dir.path().join("build");
    std::fs::create_dir_all(&build).expect("build dir");
    std::fs::write(build.join("index.html"), b"<html></html>").expect("index");
    std::fs::write(dir.path().join("outside.txt"), b"secret").expect("secret");

    let response = router(build)
        .oneshot(
            Request::builder()
                .uri("/../outside.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The guard keeps the file out of reach; the route falls back to the
    // page shell instead.
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<html></html>");
}

#[tokio::test]
async fn page_routes_fall_back_to_index_html() {
    let dir = build_dir();
    let response = get(dir.path(), "/leaderboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CONTENT_TYPE),
        Some("text/html; charset=utf-8")
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<html></html>");
}
