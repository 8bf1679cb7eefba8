//! Markdown rendering
//!
//! CommonMark with GitHub Flavored Markdown extensions (tables, strikethrough,
//! autolinks, task lists). Raw HTML in the source is omitted from the output.

use comrak::{markdown_to_html, Options};

/// Render a Markdown body to sanitized HTML
pub fn render_markdown(body: &str) -> String {
    markdown_to_html(body, &options())
}

fn options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Raw HTML and dangerous link schemes are stripped
    options.render.unsafe_ = false;
    options
}
