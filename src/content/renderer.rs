//! Post rendering
//!
//! Resolves an identifier to `<root>/<id>.md`, splits the front matter off
//! and renders the body.

use std::fs;
use std::path::{Path, PathBuf};

use super::{
    is_valid_id, parse_metadata, render_markdown, split_front_matter, ContentError, Metadata,
    Post, POST_EXTENSION,
};
use crate::logger;

/// Result of looking up a post
#[derive(Debug)]
pub enum PostOutcome {
    Found(Post),
    NotFound,
}

/// Load and render the post named by `id`
///
/// Unknown identifiers and unreadable files produce [`PostOutcome::NotFound`].
/// Malformed front matter degrades to empty metadata; the body still renders.
pub fn render_post(root: &Path, id: &str) -> PostOutcome {
    let Some(path) = resolve_path(root, id) else {
        return PostOutcome::NotFound;
    };

    let raw = match read_source(&path) {
        Ok(Some(raw)) => raw,
        Ok(None) => return PostOutcome::NotFound,
        Err(e) => {
            logger::log_error(&e.to_string());
            return PostOutcome::NotFound;
        }
    };

    let (front, body) = split_front_matter(&raw);
    let metadata = front.map_or_else(Metadata::new, |block| {
        parse_metadata(block).unwrap_or_else(|e| {
            logger::log_warning(&format!("Post '{id}': {e}; using empty metadata"));
            Metadata::new()
        })
    });

    PostOutcome::Found(Post {
        id: id.to_string(),
        metadata,
        html: render_markdown(body),
    })
}

/// Map an identifier to its source file path
fn resolve_path(root: &Path, id: &str) -> Option<PathBuf> {
    is_valid_id(id).then(|| root.join(format!("{id}.{POST_EXTENSION}")))
}

/// Read the whole source file; `Ok(None)` when it does not exist
fn read_source(path: &Path) -> Result<Option<String>, ContentError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ContentError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(outcome: PostOutcome) -> Post {
        match outcome {
            PostOutcome::Found(post) => post,
            PostOutcome::NotFound => panic!("Expected Found"),
        }
    }

    #[test]
    fn test_title_and_bold() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.md"), "---\ntitle: \"X\"\n---\n**bold**\n").unwrap();

        let post = found(render_post(dir.path(), "x"));
        assert_eq!(post.metadata.get("title").map(String::as_str), Some("X"));
        assert_eq!(post.title(), "X");
        assert!(post.html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_no_front_matter_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("my-first-post.md"), "Just text.").unwrap();

        let post = found(render_post(dir.path(), "my-first-post"));
        assert!(post.metadata.is_empty());
        assert_eq!(post.title(), "my-first-post");
        assert_eq!(post.date(), "");
        assert!(post.html.contains("<p>Just text.</p>"));
    }

    #[test]
    fn test_malformed_front_matter_keeps_body() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("broken.md"),
            "---\ntitle: [unclosed\n---\n*still here*\n",
        )
        .unwrap();

        let post = found(render_post(dir.path(), "broken"));
        assert!(post.metadata.is_empty());
        assert_eq!(post.title(), "broken");
        assert!(post.html.contains("<em>still here</em>"));
        assert!(!post.html.contains("unclosed"));
    }

    #[test]
    fn test_unknown_id_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            render_post(dir.path(), "nope"),
            PostOutcome::NotFound
        ));
        assert!(matches!(
            render_post(&dir.path().join("missing-root"), "nope"),
            PostOutcome::NotFound
        ));
    }

    #[test]
    fn test_traversal_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(dir.path().join("secret.md"), "hidden").unwrap();

        assert!(matches!(
            render_post(&posts, "../secret"),
            PostOutcome::NotFound
        ));
        assert!(matches!(render_post(&posts, ""), PostOutcome::NotFound));
        assert!(matches!(render_post(&posts, ".."), PostOutcome::NotFound));
    }

    #[test]
    fn test_identifier_case_preserved() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Mixed-Case.md"), "body").unwrap();

        let post = found(render_post(dir.path(), "Mixed-Case"));
        assert_eq!(post.id, "Mixed-Case");
    }
}
