//! Rendering helpers shared by the console views.
//!
//! - **Markdown**: summaries come back as markdown and are rendered with `pulldown_cmark`.
//!   Raw HTML embedded in the markdown is downgraded to text so a model answer can never
//!   inject markup into the page.
//! - **Counts**: thousands separators through `num_format`.
//! - **Byte sizes**: the file viewer shows sizes in B / KB / MB.

use num_format::{Locale, ToFormattedString};
use pulldown_cmark::{html, Event, Options, Parser};

/// Converts markdown into an HTML string, escaping any raw HTML in the source.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// `1234567` -> `"1,234,567"`.
pub fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}

pub fn format_bytes(size: u64) -> String {
    const KB: f64 = 1024.0;
    let bytes = size as f64;
    if bytes < KB {
        format!("{size} B")
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / (KB * KB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_renders_headings_and_lists() {
        let html = render_markdown("## Findings\n\n- one\n- two\n");
        assert!(html.contains("<h2>Findings</h2>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
