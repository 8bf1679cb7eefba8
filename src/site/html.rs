//! HTML helpers shared by all pages

use super::content::{AUTHOR, NAV_SECTIONS};

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the site shell (head, sticky nav)
pub fn layout(title: &str, main: &str) -> String {
    let mut nav: String = NAV_SECTIONS
        .iter()
        .map(|(label, id)| format!(r##"<a href="/#{id}">{label}</a>"##))
        .collect();
    nav.push_str(r#"<a href="/blog">Blog</a>"#);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <style>{STYLE}</style>
</head>
<body>
    <header class="site-header">
        <nav class="container nav">
            <a class="brand" href="/">&#x2712; {author}</a>
            <div class="nav-links">{nav}</div>
            <a class="button" href="/#contact">Let’s work &rarr;</a>
        </nav>
    </header>
    <main>
{main}
    </main>
</body>
</html>"##,
        title = escape_html(title),
        author = escape_html(AUTHOR),
    )
}

/// Section wrapper with optional kicker line above the heading
pub fn section(id: &str, title: &str, kicker: Option<&str>, inner: &str) -> String {
    let kicker = kicker.map_or_else(String::new, |k| {
        format!(r#"<p class="kicker">{}</p>"#, escape_html(k))
    });
    format!(
        r#"<section id="{id}" class="section"><div class="container">{kicker}<h2>{}</h2>{inner}</div></section>"#,
        escape_html(title),
    )
}

/// Small rounded label
pub fn tag(text: &str) -> String {
    format!(r#"<span class="tag">{}</span>"#, escape_html(text))
}

const STYLE: &str = r"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #1f2937; background: #fafaf9; }
a { color: inherit; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.site-header { position: sticky; top: 0; z-index: 50; backdrop-filter: blur(8px); background: rgba(250,250,249,0.8); border-bottom: 1px solid #e5e7eb; }
.nav { height: 4rem; display: flex; align-items: center; justify-content: space-between; }
.brand { font-weight: 600; text-decoration: none; }
.nav-links { display: flex; gap: 1.5rem; font-size: 0.9rem; }
.nav-links a { text-decoration: none; }
.nav-links a:hover { opacity: 0.8; }
.button { display: inline-block; padding: 0.5rem 1rem; border-radius: 1rem; background: #111827; color: #fff; text-decoration: none; border: 0; font: inherit; cursor: pointer; }
.button.outline { background: transparent; color: #111827; border: 1px solid #d1d5db; }
.hero { padding: 5rem 0; display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; align-items: center; }
.hero h1 { font-size: 3rem; font-weight: 600; line-height: 1.15; }
.lede { margin-top: 1.25rem; font-size: 1.1rem; color: #6b7280; }
.actions { margin-top: 2rem; display: flex; gap: 0.75rem; flex-wrap: wrap; }
.badges { margin-top: 1.5rem; display: flex; gap: 1rem; flex-wrap: wrap; font-size: 0.85rem; color: #6b7280; }
.section { padding: 5rem 0; scroll-margin-top: 6rem; }
.section h2 { font-size: 2rem; font-weight: 600; margin-bottom: 2.5rem; }
.kicker { text-transform: uppercase; letter-spacing: 0.15em; font-size: 0.8rem; color: #6b7280; margin-bottom: 0.5rem; }
.grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
.grid.two { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1.5rem; }
.card h3 { font-size: 1.2rem; font-weight: 600; margin-bottom: 0.75rem; }
.muted { color: #6b7280; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
.tag { font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 999px; background: #f3f4f6; color: #6b7280; }
.card ul { padding-left: 1.25rem; margin-top: 1rem; }
form .row { display: grid; gap: 1rem; margin-bottom: 1rem; }
form .row.two { grid-template-columns: 1fr 1fr; }
form .row.three { grid-template-columns: 1fr 1fr 1fr; }
input, textarea { width: 100%; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit; }
textarea { margin-bottom: 1rem; }
.footer { border-top: 1px solid #e5e7eb; padding: 2.5rem 0; font-size: 0.9rem; color: #6b7280; }
.footer .container { display: flex; justify-content: space-between; gap: 1rem; }
.footer nav { display: flex; gap: 1rem; }
.post { max-width: 48rem; margin: 0 auto; padding: 1.5rem; }
.post h1 { font-size: 2rem; font-weight: 600; margin-bottom: 0.5rem; }
.post .date { color: #6b7280; margin-bottom: 1rem; }
.post-body h1, .post-body h2, .post-body h3 { margin: 1.5rem 0 0.75rem; }
.post-body p, .post-body ul, .post-body ol, .post-body pre { margin-bottom: 1rem; }
.post-body ul, .post-body ol { padding-left: 1.5rem; }
.post-body code { background: #f3f4f6; padding: 0.1rem 0.3rem; border-radius: 0.25rem; }
.post-list { list-style: none; margin-top: 1rem; }
.post-list li { margin: 0.75rem 0; }
@media (max-width: 768px) { .hero, .grid, .grid.two { grid-template-columns: 1fr; } .nav-links { display: none; } }
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_layout_escapes_title() {
        let page = layout("<Blog>", "<p>main</p>");
        assert!(page.contains("<title>&lt;Blog&gt;</title>"));
        assert!(page.contains("<p>main</p>"));
        assert!(page.contains(r#"href="/blog""#));
    }

    #[test]
    fn test_section_kicker() {
        let html = section("about", "About", Some("Get to know me"), "");
        assert!(html.contains(r#"id="about""#));
        assert!(html.contains(r#"<p class="kicker">Get to know me</p>"#));
        assert!(!section("x", "X", None, "").contains("kicker"));
    }
}
