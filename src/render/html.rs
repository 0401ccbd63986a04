//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

use super::RenderError;

/// Something that turns markdown into HTML.
///
/// Implementations must be shareable with the preview worker thread.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// The default renderer, backed by pulldown-cmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark;

impl MarkdownRenderer for CommonMark {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        Ok(markdown_to_html(markdown))
    }
}

/// Converts markdown text to HTML.
///
/// Enables common markdown extensions:
/// - Tables
/// - Footnotes
/// - Strikethrough
/// - Task lists
///
/// # Example
///
/// ```
/// use memo::render::markdown_to_html;
///
/// let html = markdown_to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        let html = markdown_to_html("# Heading\n\nParagraph text.");

        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<p>Paragraph text.</p>"));
    }

    #[test]
    fn code_block() {
        let html = markdown_to_html("```rust\nfn main() {}\n```");

        assert!(html.contains("<pre>"));
        assert!(html.contains("fn main()"));
    }

    #[test]
    fn escapes_ampersand() {
        let html = markdown_to_html("Use AT&T services");
        assert!(html.contains("&amp;"));
    }

    #[test]
    fn tables() {
        let html = markdown_to_html("| A | B |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn strikethrough_and_emphasis() {
        let html = markdown_to_html("~~gone~~ *it* **bold**");

        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<em>it</em>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn task_list() {
        let html = markdown_to_html("- [x] Done\n- [ ] Todo");

        assert!(html.contains("checked"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn empty_body_renders_nothing() {
        assert!(markdown_to_html("").is_empty());
    }

    #[test]
    fn commonmark_renderer_matches_function() {
        let body = "- one\n- two";
        assert_eq!(CommonMark.render(body).unwrap(), markdown_to_html(body));
    }
}
