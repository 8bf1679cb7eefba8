//! Page rendering
//!
//! Each function returns a complete HTML document.

use super::content::{
    ABOUT_PARAGRAPHS, AUTHOR, AVAILABILITY, CONTACT_DETAILS, CONTACT_FIELDS, FOOTER_SECTIONS,
    HERO, MESSAGE_PLACEHOLDER, PROJECTS, QUICK_FACTS, SERVICES, SKILLS, TESTIMONIALS,
};
use super::html::{escape_html, layout, section, tag};
use crate::content::{Post, PostId};
use crate::inquiry::INQUIRY_RECIPIENT;

/// Portfolio home page; `year` is shown in the footer
pub fn home_page(year: i32) -> String {
    let main = [
        hero(),
        about(),
        portfolio(),
        services(),
        testimonials(),
        contact(),
        footer(year),
    ]
    .concat();
    layout(&format!("{AUTHOR} — Writer"), &main)
}

/// Blog index listing every post identifier
pub fn blog_index_page(ids: &[PostId]) -> String {
    let mut main = String::from(r#"<div class="post"><h1>Blog</h1>"#);
    if ids.is_empty() {
        main.push_str(
            r#"<p class="muted">No posts yet — add Markdown files to the <code>posts/</code> folder.</p>"#,
        );
    } else {
        let items: String = ids
            .iter()
            .map(|id| {
                format!(
                    r#"<li><a href="/blog/{href}">{label}</a></li>"#,
                    href = urlencoding::encode(id),
                    label = escape_html(&display_name(id)),
                )
            })
            .collect();
        main.push_str(&format!(r#"<ul class="post-list">{items}</ul>"#));
    }
    main.push_str("</div>");
    layout("Blog", &main)
}

/// Single post page
///
/// The post body is already sanitized HTML and is inserted as is.
pub fn post_page(post: &Post) -> String {
    let title = post.title();
    let main = format!(
        r#"<article class="post"><h1>{}</h1><p class="date">{}</p><div class="post-body">{}</div><p><a href="/blog">&larr; All posts</a></p></article>"#,
        escape_html(title),
        escape_html(&post.display_date()),
        post.html,
    );
    layout(title, &main)
}

/// Visible message for an unknown post
pub fn post_not_found_page() -> String {
    layout(
        "Post not found",
        r#"<div class="post"><p>Post not found</p><p><a href="/blog">&larr; All posts</a></p></div>"#,
    )
}

/// Link label for an identifier: hyphens shown as spaces
pub fn display_name(id: &str) -> String {
    id.replace('-', " ")
}

fn hero() -> String {
    let badges: String = HERO
        .badges
        .iter()
        .map(|b| format!("<span>{}</span>", escape_html(b)))
        .collect();
    let highlights: String = HERO
        .highlights
        .iter()
        .map(|h| format!("<p>{}</p>", escape_html(h)))
        .collect();

    format!(
        r##"<section id="home" class="container hero">
<div>
<p class="kicker">{kicker}</p>
<h1>{headline}</h1>
<p class="lede">{lede}</p>
<div class="actions"><a class="button" href="#portfolio">View Portfolio</a><a class="button outline" href="#services">Services</a></div>
<div class="badges">{badges}</div>
</div>
<div class="card">{highlights}</div>
</section>"##,
        kicker = escape_html(HERO.kicker),
        headline = escape_html(HERO.headline),
        lede = escape_html(HERO.lede),
    )
}

fn about() -> String {
    let paragraphs: String = ABOUT_PARAGRAPHS
        .iter()
        .map(|p| format!(r#"<p class="muted">{}</p>"#, escape_html(p)))
        .collect();
    let skills: String = SKILLS.iter().copied().map(tag).collect();
    let facts: String = QUICK_FACTS
        .iter()
        .map(|f| format!("<p>• {}</p>", escape_html(f)))
        .collect();

    section(
        "about",
        "About",
        Some("Get to know me"),
        &format!(
            r#"<div class="grid two"><div>{paragraphs}<div class="tags">{skills}</div></div><div class="card"><h3>Quick facts</h3><div class="muted">{facts}</div></div></div>"#
        ),
    )
}

fn portfolio() -> String {
    let cards: String = PROJECTS
        .iter()
        .map(|p| {
            let tags: String = p.tags.iter().copied().map(tag).collect();
            let link = p.link.map_or_else(String::new, |href| {
                format!(
                    r#"<a class="button" href="{}" target="_blank" rel="noreferrer">Read sample</a>"#,
                    escape_html(href)
                )
            });
            format!(
                r#"<div class="card"><h3>{}</h3><p class="muted">{}</p><div class="tags">{tags}</div>{link}</div>"#,
                escape_html(p.title),
                escape_html(p.blurb),
            )
        })
        .collect();

    section(
        "portfolio",
        "Selected Work",
        Some("Portfolio"),
        &format!(r#"<div class="grid">{cards}</div>"#),
    )
}

fn services() -> String {
    let cards: String = SERVICES
        .iter()
        .map(|s| {
            let bullets: String = s
                .bullets
                .iter()
                .map(|b| format!("<li>{}</li>", escape_html(b)))
                .collect();
            format!(
                r#"<div class="card"><h3>{}</h3><p class="muted">{}</p><ul class="muted">{bullets}</ul></div>"#,
                escape_html(s.title),
                escape_html(s.description),
            )
        })
        .collect();

    section(
        "services",
        "How I can help",
        Some("Services"),
        &format!(
            r##"<div class="grid">{cards}</div><p style="margin-top:2rem"><a class="button outline" href="#contact">Request a quote</a></p>"##
        ),
    )
}

fn testimonials() -> String {
    let cards: String = TESTIMONIALS
        .iter()
        .map(|t| {
            format!(
                r#"<div class="card"><p>“{}”</p><p class="muted" style="margin-top:1rem">— {}, {}</p></div>"#,
                escape_html(t.quote),
                escape_html(t.name),
                escape_html(t.role),
            )
        })
        .collect();

    section(
        "testimonials",
        "Kind words",
        Some("Testimonials"),
        &format!(r#"<div class="grid">{cards}</div>"#),
    )
}

fn input(name: &str, placeholder: &str, kind: &str, required: bool) -> String {
    format!(
        r#"<input name="{name}" type="{kind}" placeholder="{}"{}>"#,
        escape_html(placeholder),
        if required { " required" } else { "" },
    )
}

fn contact() -> String {
    let inputs: Vec<String> = CONTACT_FIELDS
        .iter()
        .map(|(name, placeholder, kind, required)| input(name, placeholder, kind, *required))
        .collect();
    let (identity, rest) = inputs.split_at(inputs.len().min(2));
    let (project, details) = rest.split_at(rest.len().min(1));

    let availability: String = AVAILABILITY
        .iter()
        .map(|(label, text)| {
            format!(
                "<p><strong>{}:</strong> {}</p>",
                escape_html(label),
                escape_html(text)
            )
        })
        .collect();
    let details_list: String = CONTACT_DETAILS
        .iter()
        .map(|(label, text, link)| match link {
            Some(href) => format!(
                r#"<p>{}: <a href="{}">{}</a></p>"#,
                escape_html(label),
                escape_html(href),
                escape_html(text)
            ),
            None => format!("<p>{}: {}</p>", escape_html(label), escape_html(text)),
        })
        .collect();

    let form = format!(
        r#"<div class="card"><h3>Start a project</h3>
<form method="post" action="/inquiry">
<div class="row two">{identity}</div>
<div class="row">{project}</div>
<div class="row three">{details}</div>
<textarea name="message" rows="5" placeholder="{placeholder}"></textarea>
<button type="submit" class="button">Send inquiry</button>
</form>
<p class="muted" style="margin-top:1rem">Prefer email? Write to <a href="mailto:{INQUIRY_RECIPIENT}">{INQUIRY_RECIPIENT}</a></p>
</div>"#,
        identity = identity.concat(),
        project = project.concat(),
        details = details.concat(),
        placeholder = escape_html(MESSAGE_PLACEHOLDER),
    );

    section(
        "contact",
        "Let’s build something great",
        Some("Contact"),
        &format!(
            r#"<div class="grid two">{form}<div class="card muted"><h3>Availability &amp; FAQs</h3>{availability}{details_list}</div></div>"#
        ),
    )
}

fn footer(year: i32) -> String {
    let links: String = FOOTER_SECTIONS
        .iter()
        .map(|(label, id)| format!(r##"<a href="#{id}">{label}</a>"##))
        .collect();
    format!(
        r#"<footer class="footer"><div class="container"><span>&copy; {year} {}</span><nav>{links}<a href="/blog">Blog</a></nav></div></footer>"#,
        escape_html(AUTHOR),
    )
}
