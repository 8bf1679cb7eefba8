//! Front matter parsing
//!
//! A post may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-03-04
//! ---
//! Body text
//! ```

use serde_yaml_ng::Value;

use super::{ContentError, Metadata};

const DELIMITER: &str = "---";

/// Split raw post text into (front matter, body)
///
/// Without an opening `---` line, or without a closing one, the whole text is
/// body and the front matter is `None`.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(first_line_end) = raw.find('\n') else {
        return (None, raw);
    };
    if raw[..first_line_end].trim_end() != DELIMITER {
        return (None, raw);
    }

    let block_start = first_line_end + 1;
    let mut offset = block_start;
    for line in raw[block_start..].split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == DELIMITER {
            let front = &raw[block_start..offset];
            let body = &raw[offset + line.len()..];
            return (Some(front), body);
        }
        offset += line.len();
    }

    (None, raw)
}

/// Parse a front matter block into a string mapping
pub fn parse_metadata(block: &str) -> Result<Metadata, ContentError> {
    if block.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let Value::Mapping(mapping) = serde_yaml_ng::from_str::<Value>(block)? else {
        return Err(ContentError::NotAMapping);
    };

    Ok(mapping
        .iter()
        .filter_map(|(key, value)| Some((scalar_to_string(key)?, scalar_to_string(value)?)))
        .collect())
}

/// Render a YAML value as display text
///
/// Sequences are joined with commas; nested mappings have no text form.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(items) => Some(
            items
                .iter()
                .filter_map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_front_matter() {
        let raw = "---\ntitle: Hello\ndate: 2024-01-02\n---\n# Body\n";
        let (front, body) = split_front_matter(raw);
        assert_eq!(front, Some("title: Hello\ndate: 2024-01-02\n"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_without_front_matter() {
        let raw = "# Just a body\n\ntext";
        assert_eq!(split_front_matter(raw), (None, raw));
    }

    #[test]
    fn test_split_unterminated_block() {
        let raw = "---\ntitle: Hello\nno closing line";
        assert_eq!(split_front_matter(raw), (None, raw));
    }

    #[test]
    fn test_split_crlf_and_bom() {
        let raw = "\u{feff}---\r\ntitle: Hi\r\n---\r\nbody";
        let (front, body) = split_front_matter(raw);
        assert_eq!(front, Some("title: Hi\r\n"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_split_ignores_document_end_marker() {
        let (front, body) = split_front_matter("---\ntitle: X\n...\nmore: y\n---\nbody");
        assert_eq!(front, Some("title: X\n...\nmore: y\n"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_parse_scalars() {
        let meta = parse_metadata(
            "title: \"X\"\ndate: 2024-03-04\ndraft: false\nreading_time: 5\ntags: [a, b]\nsubtitle:\n",
        )
        .unwrap();
        assert_eq!(meta["title"], "X");
        assert_eq!(meta["date"], "2024-03-04");
        assert_eq!(meta["draft"], "false");
        assert_eq!(meta["reading_time"], "5");
        assert_eq!(meta["tags"], "a, b");
        assert_eq!(meta["subtitle"], "");
    }

    #[test]
    fn test_parse_drops_nested_mappings() {
        let meta = parse_metadata("title: X\nauthor:\n  name: D\n").unwrap();
        assert_eq!(meta.len(), 1);
        assert!(!meta.contains_key("author"));
    }

    #[test]
    fn test_parse_empty_block() {
        assert!(parse_metadata("").unwrap().is_empty());
        assert!(parse_metadata("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_metadata("title: [unclosed\n").is_err());
        assert!(matches!(
            parse_metadata("- just\n- a list\n"),
            Err(ContentError::NotAMapping)
        ));
    }
}
