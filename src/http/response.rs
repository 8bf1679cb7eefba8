//! HTTP response building module
//!
//! Builders for the status codes the site serves, decoupled from page content.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};

use super::cache::CachePolicy;
use super::range::ByteRange;

/// Finish a builder, falling back to an empty response if headers were invalid
fn finish(builder: Builder, body: Bytes, label: &str) -> Response<Full<Bytes>> {
    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error(label, &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Empty the body of a HEAD response, keeping its headers
fn head_body(data: Bytes, is_head: bool) -> Bytes {
    if is_head {
        Bytes::new()
    } else {
        data
    }
}

/// Plain text response with the given status
pub fn build_text_response(status: StatusCode, text: &'static str) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(status)
            .header("Content-Type", "text/plain; charset=utf-8"),
        Bytes::from_static(text.as_bytes()),
        status.as_str(),
    )
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str, policy: CachePolicy) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header("ETag", etag)
            .header("Cache-Control", policy.to_header_value()),
        Bytes::new(),
        "304",
    )
}

/// Build 404 Not Found response for assets
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, "404 Not Found")
}

/// Build 400 Bad Request response
pub fn build_400_response(message: &str) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(StatusCode::BAD_REQUEST)
            .header("Content-Type", "text/plain; charset=utf-8"),
        Bytes::from(format!("400 Bad Request: {message}")),
        "400",
    )
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(allow: &str) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "text/plain; charset=utf-8")
            .header("Allow", allow),
        Bytes::from_static(b"405 Method Not Allowed"),
        "405",
    )
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(allow: &str, enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", allow);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", allow)
            .header("Access-Control-Allow-Headers", "Content-Type, Range")
            .header("Access-Control-Max-Age", "86400");
    }

    finish(builder, Bytes::new(), "OPTIONS")
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::PAYLOAD_TOO_LARGE, "413 Payload Too Large")
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: usize) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(StatusCode::RANGE_NOT_SATISFIABLE)
            .header("Content-Type", "text/plain; charset=utf-8")
            .header("Content-Range", format!("bytes */{file_size}")),
        Bytes::from_static(b"Range Not Satisfiable"),
        "416",
    )
}

/// Build 303 See Other response
///
/// Used to hand `mailto:` links to the browser; never cached.
pub fn build_see_other_response(location: &str) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(StatusCode::SEE_OTHER)
            .header("Location", location)
            .header("Cache-Control", CachePolicy::NoStore.to_header_value())
            .header("Content-Type", "text/plain; charset=utf-8"),
        Bytes::from_static(b"Opening your mail client..."),
        "303",
    )
}

/// Build HTML page response
pub fn build_html_response(
    status: StatusCode,
    content: String,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    finish(
        Response::builder()
            .status(status)
            .header("Content-Type", "text/html; charset=utf-8")
            .header("Content-Length", content_length)
            .header("Cache-Control", CachePolicy::NoCache.to_header_value()),
        head_body(Bytes::from(content), is_head),
        "HTML",
    )
}

/// Build success response with cache control
pub fn build_cached_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    policy: CachePolicy,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    finish(
        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", content_type)
            .header("Content-Length", content_length)
            .header("Accept-Ranges", "bytes")
            .header("ETag", etag)
            .header("Cache-Control", policy.to_header_value()),
        head_body(data, is_head),
        "200",
    )
}

/// Build 206 Partial Content response
///
/// `data` is the full content; only `range` is sent.
pub fn build_partial_response(
    data: &Bytes,
    range: ByteRange,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(StatusCode::PARTIAL_CONTENT)
            .header("Content-Type", content_type)
            .header("Content-Length", range.byte_count())
            .header("Content-Range", range.content_range(data.len()))
            .header("Accept-Ranges", "bytes")
            .header("ETag", etag)
            .header("Cache-Control", CachePolicy::STATIC.to_header_value()),
        head_body(data.slice(range.start..=range.end), is_head),
        "206",
    )
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
