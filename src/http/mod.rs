//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the site's pages.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used types
pub use cache::CachePolicy;
pub use range::parse_range_header;
pub use response::{
    build_304_response, build_400_response, build_404_response, build_405_response,
    build_413_response, build_416_response, build_html_response, build_options_response,
    build_see_other_response, build_text_response,
};
