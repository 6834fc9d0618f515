//! Markdown rendering
//!
//! Review text comes back from the LLM as markdown; it is rendered
//! best-effort into HTML fragments. Malformed input never fails a request.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Escape text for embedding in an HTML page (raw file contents in `<pre>`).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String is infallible.
    let _ = pulldown_cmark_escape::escape_html(&mut out, text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_emphasis() {
        let html = markdown_to_html("# Review\n\nThis is **solid** code.");
        assert!(html.contains("<h1>Review</h1>"));
        assert!(html.contains("<strong>solid</strong>"));
    }

    #[test]
    fn test_renders_tables() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_malformed_markdown_still_renders() {
        let html = markdown_to_html("```\nunterminated fence");
        assert!(html.contains("unterminated fence"));
    }

    #[test]
    fn test_escape_html() {
        let escaped = escape_html("#include <stdio.h> && \"y\"");
        assert!(!escaped.contains("<stdio.h>"));
        assert!(escaped.contains("&lt;stdio.h&gt;"));
        assert!(escaped.contains("&amp;&amp;"));
    }
}
