//! Markdown rendering for idea content.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag};

/// Relative targets and `http`, `https` and `mailto` URLs.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    match url.find([':', '/', '?', '#']) {
        Some(i) if url[i..].starts_with(':') => {
            let scheme = url[..i].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Render markdown to HTML. Raw HTML in the source is shown as text and link
/// or image targets with other schemes are replaced by `#`.
pub fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(source, opts).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_markdown("**bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let html = render_markdown("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click</a>"##));

        let html = render_markdown("![pic]( JaVaScRiPt:alert(1))");
        assert!(!html.to_lowercase().contains("javascript:"));

        let html = render_markdown("[x](data:text/html,boom)");
        assert!(!html.contains("data:"));
    }

    #[test]
    fn test_safe_links_are_kept() {
        let html = render_markdown("[site](https://example.com/a?b=c:d) [mail](mailto:ann@example.com) [rel](/ideas/1) [frag](#top)");
        assert!(html.contains(r#"href="https://example.com/a?b=c:d""#));
        assert!(html.contains(r#"href="mailto:ann@example.com""#));
        assert!(html.contains(r#"href="/ideas/1""#));
        assert!(html.contains(r##"href="#top""##));
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
