//! Static file serving module
//!
//! Serves stylesheets, images, fonts and writing samples from the static
//! directory with `ETag` revalidation and Range support.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParseResult, CachePolicy};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a file from the static directory
///
/// `relative` is the request path below the `/static/` prefix.
pub async fn serve_static(
    ctx: &RequestContext<'_>,
    static_dir: &Path,
    relative: &str,
) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_within(static_dir, relative).await else {
        return http::build_404_response();
    };

    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            build_static_file_response(Bytes::from(content), content_type, ctx, CachePolicy::STATIC)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            http::build_404_response()
        }
    }
}

/// Serve the favicon named by the request path from the static directory
pub async fn serve_favicon(ctx: &RequestContext<'_>, static_dir: &Path) -> Response<Full<Bytes>> {
    let name = ctx.path.trim_start_matches('/');
    match fs::read(static_dir.join(name)).await {
        Ok(data) => {
            let content_type = mime::get_content_type(Path::new(name).extension().and_then(|e| e.to_str()));
            build_static_file_response(Bytes::from(data), content_type, ctx, CachePolicy::FAVICON)
        }
        Err(_) => http::build_404_response(),
    }
}

/// Resolve `relative` under `root`, refusing anything that escapes it
async fn resolve_within(root: &Path, relative: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(relative).ok()?;
    let relative = decoded.trim_start_matches('/');
    if relative.is_empty() || relative.ends_with('/') {
        return None;
    }

    let root_canonical = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    // Missing files are ordinary 404s, not worth a log line
    let file_canonical = fs::canonicalize(root.join(relative)).await.ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {relative} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    let metadata = fs::metadata(&file_canonical).await.ok()?;
    metadata.is_file().then_some(file_canonical)
}

/// Build static file response with `ETag` and Range support
fn build_static_file_response(
    data: Bytes,
    content_type: &str,
    ctx: &RequestContext<'_>,
    policy: CachePolicy,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(&data);

    // Check if client has cached version
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag, policy);
    }

    match http::parse_range_header(ctx.range_header.as_deref(), data.len()) {
        RangeParseResult::Valid(range) => http::response::build_partial_response(
            &data,
            range,
            content_type,
            &etag,
            ctx.is_head,
        ),
        RangeParseResult::NotSatisfiable => http::build_416_response(data.len()),
        RangeParseResult::None => {
            http::response::build_cached_response(data, content_type, &etag, policy, ctx.is_head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    fn ctx<'a>(path: &'a str) -> RequestContext<'a> {
        RequestContext {
            path,
            is_head: false,
            if_none_match: None,
            range_header: None,
        }
    }

    #[tokio::test]
    async fn test_serves_file_with_etag() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("site.css"), "body{}").unwrap();

        let resp = serve_static(&ctx("/static/site.css"), dir.path(), "site.css").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
        let etag = resp.headers()["ETag"].to_str().unwrap().to_string();

        let mut revalidate = ctx("/static/site.css");
        revalidate.if_none_match = Some(etag);
        let resp = serve_static(&revalidate, dir.path(), "site.css").await;
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_range_request() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sample.pdf"), "0123456789").unwrap();

        let mut ranged = ctx("/static/sample.pdf");
        ranged.range_header = Some("bytes=0-3".to_string());
        let resp = serve_static(&ranged, dir.path(), "sample.pdf").await;
        assert_eq!(resp.status(), StatusCode::PARTIAL_CONTENT);

        ranged.range_header = Some("bytes=50-".to_string());
        let resp = serve_static(&ranged, dir.path(), "sample.pdf").await;
        assert_eq!(resp.status(), StatusCode::RANGE_NOT_SATISFIABLE);
    }

    #[tokio::test]
    async fn test_traversal_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("static");
        std::fs::create_dir(&public).unwrap();
        std::fs::write(dir.path().join("config.toml"), "secret").unwrap();

        for rel in ["../config.toml", "%2E%2E/config.toml", "missing.css", ""] {
            let resp = serve_static(&ctx("/static/x"), &public, rel).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{rel}");
        }
    }

    #[tokio::test]
    async fn test_favicon() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("favicon.svg"), "<svg/>").unwrap();

        let resp = serve_favicon(&ctx("/favicon.svg"), dir.path()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "image/svg+xml");
        assert_eq!(resp.headers()["Cache-Control"], "public, max-age=86400");

        let resp = serve_favicon(&ctx("/favicon.ico"), dir.path()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
