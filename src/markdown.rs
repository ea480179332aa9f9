//! Note Markdown
//!
//! Renders note bodies with pulldown-cmark. Raw HTML in a note is shown as
//! text, never injected into the page, and link or image targets with a
//! scheme other than http, https or mailto are replaced by `#`.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Whether a link target may be emitted as-is.
///
/// Relative targets (no scheme before the first `/`, `?` or `#`) are allowed.
/// Browsers ignore whitespace and control characters inside a scheme, so
/// those are dropped before looking at it.
pub fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url.chars().filter(|c| !c.is_ascii_whitespace() && !c.is_control()).collect();
    let scheme_end = cleaned.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

fn safe_dest(dest_url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&dest_url) {
        dest_url
    } else {
        log::warn!("[markdown] dropped unsafe link target");
        CowStr::Borrowed("#")
    }
}

/// Parse markdown into HTML safe for `inner_html`
pub fn render_note(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_dest(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_dest(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Plain-text preview of a note body, cut at `max_chars`
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let plain: String = Parser::new_ext(text, get_options())
        .filter_map(|event| match event {
            Event::Text(t) | Event::Code(t) => Some(t),
            Event::SoftBreak | Event::HardBreak => Some(CowStr::Borrowed(" ")),
            _ => None,
        })
        .fold(String::new(), |mut acc, t| {
            acc.push_str(&t);
            acc
        });
    let plain = plain.split_whitespace().collect::<Vec<_>>().join(" ");

    if plain.chars().count() <= max_chars {
        plain
    } else {
        let cut: String = plain.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_note("# Follow up\n\n- call **Monday**\n- ~~email~~");
        assert!(html.contains("<h1>Follow up</h1>"));
        assert!(html.contains("<strong>Monday</strong>"));
        assert!(html.contains("<del>email</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_note("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render_note("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click</a>"##));

        let html = render_note("<javascript:alert(1)>");
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains(r#"href="javascript"#));

        assert!(!is_safe_url("JaVa\tScRiPt:alert(1)"));
    }

    #[test]
    fn test_data_images_are_neutralized() {
        let html = render_note("![logo](data:image/svg+xml;base64,PHN2Zz4=)");
        assert!(!html.contains("data:"));
        assert!(html.contains(r##"src="#""##));
    }

    #[test]
    fn test_ordinary_links_survive() {
        let html = render_note("[posting](https://jobs.example.com/42) and [me](mailto:a@b.c) and [rel](/notes?app=3)");
        assert!(html.contains(r#"href="https://jobs.example.com/42""#));
        assert!(html.contains(r#"href="mailto:a@b.c""#));
        assert!(html.contains(r#"href="/notes?app=3""#));
        assert!(is_safe_url("notes/1#top"));
        assert!(!is_safe_url(" vbscript:x"));
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("**Recruiter** said\nnext week", 100), "Recruiter said next week");
        assert_eq!(excerpt("abcdef ghij", 6), "abcdef…");
        assert_eq!(excerpt("", 10), "");
    }
}
