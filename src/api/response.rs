// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;

/// Build JSON response
#[allow(clippy::unnecessary_wraps)]
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Ok(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ));
        }
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-cache")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        }))
}

/// `{"error": {"code": ..., "message": ...}}` with the given status
fn error_body(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": {
            "code": status.as_u16(),
            "message": message
        }
    });
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from(message.to_string()))))
}

/// 404 Not Found response
pub fn not_found() -> Response<Full<Bytes>> {
    error_body(StatusCode::NOT_FOUND, "Not Found")
}

/// 400 Bad Request response
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    error_body(StatusCode::BAD_REQUEST, message)
}

/// 413 Payload Too Large response
pub fn payload_too_large() -> Response<Full<Bytes>> {
    error_body(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
}

/// 405 Method Not Allowed response
pub fn method_not_allowed(allow: &str) -> Response<Full<Bytes>> {
    let mut resp = error_body(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    if let Ok(value) = hyper::header::HeaderValue::from_str(allow) {
        resp.headers_mut().insert(hyper::header::ALLOW, value);
    }
    resp
}

/// 500 Internal Server Error response
pub fn internal_error() -> Response<Full<Bytes>> {
    error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
