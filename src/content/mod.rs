//! Blog content module
//!
//! Reads Markdown posts from the content root on every request:
//! - Listing identifiers derived from `.md` filenames
//! - Splitting YAML front matter from the body
//! - Rendering the body to sanitized HTML
//!
//! Nothing is cached between calls; each operation opens, reads and releases
//! its own handles.

mod front_matter;
mod lister;
mod markdown;
mod renderer;

use std::collections::BTreeMap;
use std::path::PathBuf;

pub use front_matter::{parse_metadata, split_front_matter};
pub use lister::list_posts;
pub use markdown::render_markdown;
pub use renderer::{render_post, PostOutcome};

/// File extension recognized as a post source
pub const POST_EXTENSION: &str = "md";

/// Post identifier, the filename without its extension
pub type PostId = String;

/// Front matter values keyed by name
pub type Metadata = BTreeMap<String, String>;

/// Errors raised while reading content
///
/// These never reach visitors: callers log them and fold them into an
/// empty listing or a not-found outcome.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content root '{path}' is unavailable: {source}")]
    RootUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read post '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed front matter: {0}")]
    FrontMatter(#[from] serde_yaml_ng::Error),
    #[error("front matter is not a key/value mapping")]
    NotAMapping,
}

/// A rendered blog post
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub metadata: Metadata,
    pub html: String,
}

impl Post {
    /// Title from front matter, or the identifier unmodified
    pub fn title(&self) -> &str {
        self.metadata
            .get("title")
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.id)
    }

    /// Date from front matter as written, or empty
    pub fn date(&self) -> &str {
        self.metadata.get("date").map_or("", String::as_str)
    }

    /// Date formatted for display
    ///
    /// ISO dates (`2024-03-04` or RFC 3339) become `March 4, 2024`; anything
    /// else is shown verbatim.
    pub fn display_date(&self) -> String {
        format_display_date(self.date())
    }
}

fn format_display_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

/// Check that an identifier resolves to a file directly under the content root
///
/// Only path separators and the `.`/`..` components can leave the root;
/// other dots (`draft..v2`, `.notes`) are ordinary file names.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}
