//! Writer portfolio site with a Markdown blog
//!
//! The portfolio page is static; blog posts are `.md` files with YAML front
//! matter under the posts directory, and the contact form is answered with a
//! `mailto:` link.

pub mod api;
pub mod config;
pub mod content;
pub mod handler;
pub mod http;
pub mod inquiry;
pub mod logger;
pub mod server;
pub mod site;
