//! Request handler module
//!
//! Responsible for request routing dispatch and the site's page handlers:
//! portfolio home, blog listing and posts, inquiry redirects and static assets.

pub mod blog;
mod body;
pub mod inquiry;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use body::{read_body, BodyError};
pub use router::{handle_request, Route};
