//! Blog page handlers
//!
//! Content access is synchronous file I/O, so it runs on the blocking pool.

use crate::content::{self, PostId, PostOutcome};
use crate::http;
use crate::logger;
use crate::site;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::path::PathBuf;
use tokio::task::{self, JoinError};

/// List post identifiers off the async runtime
pub async fn load_index(posts_dir: PathBuf) -> Result<Vec<PostId>, JoinError> {
    task::spawn_blocking(move || content::list_posts(&posts_dir).collect::<Vec<_>>()).await
}

/// Render one post off the async runtime
pub async fn load_post(posts_dir: PathBuf, id: String) -> Result<PostOutcome, JoinError> {
    task::spawn_blocking(move || content::render_post(&posts_dir, &id)).await
}

/// `GET /blog`
pub async fn serve_index(posts_dir: PathBuf, is_head: bool) -> Response<Full<Bytes>> {
    match load_index(posts_dir).await {
        Ok(ids) => http::build_html_response(StatusCode::OK, site::blog_index_page(&ids), is_head),
        Err(e) => internal_error(&e),
    }
}

/// `GET /blog/<id>`; unknown posts get the not-found page with a 404 status
pub async fn serve_post(posts_dir: PathBuf, id: String, is_head: bool) -> Response<Full<Bytes>> {
    match load_post(posts_dir, id).await {
        Ok(PostOutcome::Found(post)) => {
            http::build_html_response(StatusCode::OK, site::post_page(&post), is_head)
        }
        Ok(PostOutcome::NotFound) => http::build_html_response(
            StatusCode::NOT_FOUND,
            site::post_not_found_page(),
            is_head,
        ),
        Err(e) => internal_error(&e),
    }
}

fn internal_error(e: &JoinError) -> Response<Full<Bytes>> {
    logger::log_error(&format!("Content task failed: {e}"));
    http::build_text_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "500 Internal Server Error",
    )
}
