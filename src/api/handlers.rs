// Blog and inquiry API handlers module

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use super::response::{bad_request, internal_error, json_response, not_found, payload_too_large};
use super::types::{PostDetail, PostSummary};
use crate::config::AppState;
use crate::content::PostOutcome;
use crate::handler::{blog, read_body, BodyError};
use crate::inquiry::Inquiry;
use crate::logger;

/// List every post
pub async fn handle_posts_list(state: Arc<AppState>) -> Result<Response<Full<Bytes>>, Infallible> {
    let Ok(ids) = blog::load_index(state.posts_dir.clone()).await else {
        logger::log_error("Post listing task failed");
        return Ok(internal_error());
    };
    let posts: Vec<PostSummary> = ids.into_iter().map(PostSummary::new).collect();
    json_response(StatusCode::OK, &posts)
}

/// Render one post as JSON
pub async fn handle_post_get(
    state: Arc<AppState>,
    id: String,
) -> Result<Response<Full<Bytes>>, Infallible> {
    match blog::load_post(state.posts_dir.clone(), id).await {
        Ok(PostOutcome::Found(post)) => json_response(StatusCode::OK, &PostDetail::from(post)),
        Ok(PostOutcome::NotFound) => Ok(not_found()),
        Err(e) => {
            logger::log_error(&format!("Post render task failed: {e}"));
            Ok(internal_error())
        }
    }
}

/// Encode a JSON inquiry into its `mailto:` link
///
/// Every field is optional except `name` and `email`.
pub async fn handle_inquiry_post<B>(
    body: B,
    limit: usize,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let whole_body = match read_body(body, limit).await {
        Ok(bytes) => bytes,
        Err(BodyError::TooLarge(_)) => return Ok(payload_too_large()),
        Err(e) => return Ok(bad_request(&e.to_string())),
    };

    let inquiry: Inquiry = match serde_json::from_slice(&whole_body) {
        Ok(i) => i,
        Err(e) => return Ok(bad_request(&format!("Invalid JSON: {e}"))),
    };

    let missing = inquiry.missing_required();
    if !missing.is_empty() {
        return Ok(bad_request(&format!("Missing required field(s): {}", missing.join(", "))));
    }

    json_response(StatusCode::OK, &inquiry.encode())
}
