//! Site view layer
//!
//! Static portfolio content and the HTML pages built from it.

pub mod content;
mod html;
mod pages;

pub use html::escape_html;
pub use pages::{blog_index_page, display_name, home_page, post_not_found_page, post_page};
