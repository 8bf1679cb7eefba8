// API module entry
// Read-only JSON view of the blog plus the inquiry encoder

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::router::decode_segment;
use crate::logger;

// Re-export public types
pub use response::*;
pub use types::{PostDetail, PostSummary};

const POST_PREFIX: &str = "/api/posts/";

/// API route handler
///
/// Dispatches to handler functions based on request path and method
pub async fn handle_api_request<B>(req: Request<B>, state: Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let path = req.uri().path().to_string();
    let method = req.method().clone();
    let read = method == Method::GET || method == Method::HEAD;

    let result: Result<Response<Full<Bytes>>, Infallible> = match path.as_str() {
        // Post listing
        "/api/posts" | "/api/posts/" if read => handlers::handle_posts_list(state).await,
        // Single post
        p if read && p.starts_with(POST_PREFIX) => {
            match p.strip_prefix(POST_PREFIX).and_then(decode_segment) {
                Some(id) => handlers::handle_post_get(state, id).await,
                None => Ok(not_found()),
            }
        }
        // Inquiry encoder
        "/api/inquiry" if method == Method::POST => {
            let limit = usize::try_from(state.config.http.max_body_size).unwrap_or(usize::MAX);
            handlers::handle_inquiry_post(req.into_body(), limit).await
        }
        "/api/posts" | "/api/posts/" => Ok(method_not_allowed("GET, HEAD, OPTIONS")),
        "/api/inquiry" => Ok(method_not_allowed("POST, OPTIONS")),
        p if p.starts_with(POST_PREFIX) => Ok(method_not_allowed("GET, HEAD, OPTIONS")),
        // Unknown route
        _ => Ok(not_found()),
    };

    let response = result.unwrap_or_else(|never| match never {});
    logger::log_api_request(method.as_str(), &path, response.status().as_u16());
    response
}
