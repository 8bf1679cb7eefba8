//! Contact form handler
//!
//! The form posts here; the answer is a redirect to a `mailto:` link so the
//! visitor's own mail client sends the message.

use crate::handler::{read_body, BodyError};
use crate::http;
use crate::inquiry::Inquiry;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::Response;

/// `POST /inquiry` with an `application/x-www-form-urlencoded` body
pub async fn submit_form<B>(body: B, limit: usize) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let bytes = match read_body(body, limit).await {
        Ok(bytes) => bytes,
        Err(BodyError::TooLarge(max)) => {
            logger::log_warning(&format!("Inquiry body exceeds {max} bytes"));
            return http::build_413_response();
        }
        Err(e) => {
            logger::log_warning(&e.to_string());
            return http::build_400_response("unreadable body");
        }
    };

    let inquiry = Inquiry::from_form(&String::from_utf8_lossy(&bytes));
    let missing = inquiry.missing_required();
    if !missing.is_empty() {
        return http::build_400_response(&format!("missing {}", missing.join(", ")));
    }

    let link = inquiry.encode();
    logger::log_debug(&format!("Inquiry composed: {}", link.subject));
    http::build_see_other_response(&link.uri)
}
