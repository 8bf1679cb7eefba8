//! Post listing
//!
//! Scans the content root for `.md` files and derives identifiers from their names.

use std::fs;
use std::path::Path;

use super::{is_valid_id, ContentError, PostId, POST_EXTENSION};
use crate::logger;

/// List post identifiers under the content root in alphabetical order
///
/// A missing or unreadable root yields an empty sequence; the failure is
/// logged as a warning and never returned to the caller.
pub fn list_posts(root: &Path) -> impl Iterator<Item = PostId> {
    let ids = match scan_root(root) {
        Ok(ids) => ids,
        Err(e) => {
            logger::log_warning(&e.to_string());
            Vec::new()
        }
    };
    ids.into_iter()
}

fn scan_root(root: &Path) -> Result<Vec<PostId>, ContentError> {
    let entries = fs::read_dir(root).map_err(|source| ContentError::RootUnavailable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut ids: Vec<PostId> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| post_id_from_path(&entry.path()))
        .collect();
    ids.sort();
    Ok(ids)
}

/// Derive the identifier for a post file, if the path names one
fn post_id_from_path(path: &Path) -> Option<PostId> {
    if path.extension()?.to_str()? != POST_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    is_valid_id(stem).then(|| stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{render_post, PostOutcome};
    use std::fs;

    #[test]
    fn test_lists_only_markdown() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\ntitle: Hello\n---\nbody").unwrap();
        fs::write(dir.path().join("b.txt"), "not a post").unwrap();

        let ids: Vec<_> = list_posts(dir.path()).collect();
        assert_eq!(ids, vec!["a".to_string()]);
    }

    #[test]
    fn test_counts_and_strips_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta.md", "Alpha-Post.md", "middle.md"] {
            fs::write(dir.path().join(name), "text").unwrap();
        }
        for name in ["notes.markdown", "README", "draft.md.bak", "image.png"] {
            fs::write(dir.path().join(name), "text").unwrap();
        }

        let ids: Vec<_> = list_posts(dir.path()).collect();
        assert_eq!(ids, vec!["Alpha-Post", "middle", "zeta"]);
    }

    #[test]
    fn test_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();
        fs::write(dir.path().join("visible.md"), "text").unwrap();

        let ids: Vec<_> = list_posts(dir.path()).collect();
        assert_eq!(ids, vec!["visible"]);
    }

    #[test]
    fn test_dotted_names_are_listed_and_render() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("draft..v2.md"), "---\ntitle: Draft\n---\nv2").unwrap();
        fs::write(dir.path().join(".notes.md"), "notes").unwrap();
        fs::write(dir.path().join("ok.md"), "ok").unwrap();

        let ids: Vec<_> = list_posts(dir.path()).collect();
        assert_eq!(ids, vec![".notes", "draft..v2", "ok"]);

        match render_post(dir.path(), "draft..v2") {
            PostOutcome::Found(post) => assert_eq!(post.title(), "Draft"),
            PostOutcome::NotFound => panic!("draft..v2 should render"),
        }
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert_eq!(list_posts(&missing).count(), 0);
    }

    #[test]
    fn test_every_listed_id_renders() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.md"), "# One").unwrap();
        fs::write(dir.path().join("two-words.md"), "Two").unwrap();

        for id in list_posts(dir.path()) {
            assert!(matches!(
                render_post(dir.path(), &id),
                PostOutcome::Found(_)
            ));
        }
    }
}
