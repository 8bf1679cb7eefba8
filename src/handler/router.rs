//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for route matching,
//! method validation, body size checks and access logging.

use crate::api;
use crate::config::{AppState, RoutesConfig};
use crate::handler::{blog, inquiry, static_files};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::site;
use chrono::Datelike;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderMap, HeaderValue, SERVER};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

const READ_METHODS: &str = "GET, HEAD, OPTIONS";
const WRITE_METHODS: &str = "POST, OPTIONS";
const API_METHODS: &str = "GET, HEAD, POST, OPTIONS";

/// Request context encapsulating information needed for asset responses
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

impl<'a> RequestContext<'a> {
    fn from_parts(path: &'a str, method: &Method, headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };
        Self {
            path,
            is_head: *method == Method::HEAD,
            if_none_match: header("if-none-match"),
            range_header: header("range"),
        }
    }
}

/// Site routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Health,
    Favicon,
    BlogIndex,
    /// Percent-decoded post identifier
    BlogPost(String),
    Inquiry,
    /// Anything under `/api/`; the api module does its own dispatch
    Api,
    /// Path below `/static/`, still percent-encoded
    Static(String),
    NotFound,
}

impl Route {
    /// Match a request path against the site's routes
    pub fn resolve(path: &str, routes: &RoutesConfig) -> Self {
        if routes.health.enabled
            && (path == routes.health.liveness_path || path == routes.health.readiness_path)
        {
            return Self::Health;
        }
        if routes.favicon_paths.iter().any(|p| p == path) {
            return Self::Favicon;
        }

        match path {
            "/" | "/index.html" => Self::Home,
            "/blog" | "/blog/" => Self::BlogIndex,
            "/inquiry" => Self::Inquiry,
            _ if path.starts_with("/api/") => Self::Api,
            _ => {
                if let Some(rest) = path.strip_prefix("/static/") {
                    return Self::Static(rest.to_string());
                }
                path.strip_prefix("/blog/")
                    .and_then(decode_segment)
                    .map_or(Self::NotFound, Self::BlogPost)
            }
        }
    }

    /// Value of the `Allow` header for this route
    pub const fn allowed_methods(&self) -> &'static str {
        match self {
            Self::Inquiry => WRITE_METHODS,
            Self::Api => API_METHODS,
            _ => READ_METHODS,
        }
    }

    fn accepts(&self, method: &Method) -> bool {
        match self {
            Self::Inquiry => *method == Method::POST,
            // 404 regardless of method
            Self::Api | Self::NotFound => true,
            _ => *method == Method::GET || *method == Method::HEAD,
        }
    }
}

/// Percent-decode a single path segment; `None` if empty, nested or not UTF-8
pub fn decode_segment(segment: &str) -> Option<String> {
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    urlencoding::decode(segment).ok().map(std::borrow::Cow::into_owned)
}

/// Main entry point for HTTP request handling
///
/// Generic over the body so the router can be driven without a socket.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer: Option<SocketAddr>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut entry =
        AccessLogEntry::from_request(peer, req.method(), req.uri(), req.version(), req.headers());
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let mut response = route_request(req, &state).await;

    match HeaderValue::from_str(&state.config.http.server_name) {
        Ok(value) => {
            response.headers_mut().insert(SERVER, value);
        }
        Err(_) => logger::log_warning("http.server_name is not a valid header value"),
    }

    if state.config.logging.access_log {
        let body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.finish(
            response.status().as_u16(),
            usize::try_from(body_bytes).unwrap_or(usize::MAX),
        );
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Validate the method, then dispatch to the route's handler
async fn route_request<B>(req: Request<B>, state: &Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let route = Route::resolve(req.uri().path(), &state.config.routes);
    let method = req.method().clone();

    // 1. Preflight and method checks
    if method == Method::OPTIONS {
        return http::build_options_response(
            route.allowed_methods(),
            state.config.http.enable_cors,
        );
    }
    if !route.accepts(&method) {
        logger::log_warning(&format!(
            "Method not allowed: {method} {}",
            req.uri().path()
        ));
        return http::build_405_response(route.allowed_methods());
    }

    // 2. Reject oversized bodies before reading them
    if let Some(resp) = check_body_size(req.headers(), state.config.http.max_body_size) {
        return resp;
    }

    let is_head = method == Method::HEAD;
    let limit = usize::try_from(state.config.http.max_body_size).unwrap_or(usize::MAX);

    // 3. Dispatch
    match route {
        Route::Health => http::build_text_response(StatusCode::OK, "ok"),
        Route::Home => serve_home(is_head),
        Route::BlogIndex => blog::serve_index(state.posts_dir.clone(), is_head).await,
        Route::BlogPost(id) => blog::serve_post(state.posts_dir.clone(), id, is_head).await,
        Route::Inquiry => inquiry::submit_form(req.into_body(), limit).await,
        Route::Api => api::handle_api_request(req, Arc::clone(state)).await,
        Route::Favicon => {
            let ctx = RequestContext::from_parts(req.uri().path(), &method, req.headers());
            static_files::serve_favicon(&ctx, &state.static_dir).await
        }
        Route::Static(rest) => {
            let ctx = RequestContext::from_parts(req.uri().path(), &method, req.headers());
            static_files::serve_static(&ctx, &state.static_dir, &rest).await
        }
        Route::NotFound => http::build_404_response(),
    }
}

/// Portfolio home page with the current year in the footer
fn serve_home(is_head: bool) -> Response<Full<Bytes>> {
    let year = chrono::Local::now().year();
    http::build_html_response(StatusCode::OK, site::home_page(year), is_head)
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_warning(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn test_state(root: &std::path::Path) -> Arc<AppState> {
        let posts = root.join("posts");
        let assets = root.join("static");
        std::fs::create_dir_all(&posts).unwrap();
        std::fs::create_dir_all(&assets).unwrap();
        std::fs::write(
            posts.join("hello-world.md"),
            "---\ntitle: Hello World\ndate: 2024-05-01\n---\nFirst **post**.",
        )
        .unwrap();
        std::fs::write(assets.join("favicon.svg"), "<svg/>").unwrap();

        let mut config = Config::load_from(root.join("absent").to_str().unwrap()).unwrap();
        config.content.posts_dir = posts.to_string_lossy().into_owned();
        config.content.static_dir = assets.to_string_lossy().into_owned();
        config.logging.access_log = false;
        Arc::new(AppState::new(&config))
    }

    fn request(method: Method, uri: &str, body: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Full::new(Bytes::from(body.to_string())))
            .unwrap()
    }

    async fn send(state: &Arc<AppState>, req: Request<Full<Bytes>>) -> Response<Full<Bytes>> {
        handle_request(req, Arc::clone(state), None).await.unwrap()
    }

    async fn body_text(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_route_resolve() {
        let routes = RoutesConfig::default();
        assert_eq!(Route::resolve("/", &routes), Route::Home);
        assert_eq!(Route::resolve("/healthz", &routes), Route::Health);
        assert_eq!(Route::resolve("/favicon.ico", &routes), Route::Favicon);
        assert_eq!(Route::resolve("/blog", &routes), Route::BlogIndex);
        assert_eq!(
            Route::resolve("/blog/my%20post", &routes),
            Route::BlogPost("my post".to_string())
        );
        assert_eq!(Route::resolve("/blog/a/b", &routes), Route::NotFound);
        assert_eq!(Route::resolve("/api/posts", &routes), Route::Api);
        assert_eq!(
            Route::resolve("/static/css/site.css", &routes),
            Route::Static("css/site.css".to_string())
        );
        assert_eq!(Route::resolve("/nope", &routes), Route::NotFound);
    }

    #[tokio::test]
    async fn test_home_and_blog() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let resp = send(&state, request(Method::GET, "/", "")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Server"], "folio/0.1");
        assert!(body_text(resp).await.contains("Deborah George"));

        let resp = send(&state, request(Method::GET, "/blog", "")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp)
            .await
            .contains(r#"<a href="/blog/hello-world">hello world</a>"#));

        let resp = send(&state, request(Method::GET, "/blog/hello-world", "")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<strong>post</strong>"));
    }

    #[tokio::test]
    async fn test_unknown_post_is_404_page() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let resp = send(&state, request(Method::GET, "/blog/does-not-exist", "")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_text(resp).await.contains("Post not found"));

        let resp = send(&state, request(Method::GET, "/blog/..%2Fconfig", "")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let resp = send(&state, request(Method::HEAD, "/blog", "")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_inquiry_redirects_to_mailto() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let resp = send(
            &state,
            request(
                Method::POST,
                "/inquiry",
                "name=Jane&email=jane%40example.com&project=Blog+series",
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers()["Location"].to_str().unwrap();
        assert!(location.starts_with("mailto:hello@deborahgeorge.writes?subject=Project%20inquiry%3A%20Blog%20series"));
    }

    #[tokio::test]
    async fn test_inquiry_requires_name_and_email() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let resp = send(&state, request(Method::POST, "/inquiry", "name=Jane")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(resp).await.contains("email"));
    }

    #[tokio::test]
    async fn test_content_length_over_limit() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let mut req = request(Method::POST, "/inquiry", "name=Jane");
        req.headers_mut()
            .insert("content-length", HeaderValue::from_static("10000000"));
        let resp = send(&state, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_method_checks() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let resp = send(&state, request(Method::DELETE, "/blog", "")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], READ_METHODS);

        let resp = send(&state, request(Method::GET, "/inquiry", "")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], WRITE_METHODS);

        let resp = send(&state, request(Method::OPTIONS, "/inquiry", "")).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
    }

    #[tokio::test]
    async fn test_health_favicon_and_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let resp = send(&state, request(Method::GET, "/readyz", "")).await;
        assert_eq!(body_text(resp).await, "ok");

        let resp = send(&state, request(Method::GET, "/favicon.svg", "")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&state, request(Method::GET, "/missing", "")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
