mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod page;
mod parser;
pub mod site;
mod span;

pub use block::{Block, BlockKind};
pub use config::{Config, ConfigError, ListNumbering, MarkdownConfig, SiteConfig};
pub use error::Error;
pub use html::span_to_node;
pub use inline::{split_delimiter, tokenize};
pub use node::{Attributes, BaseNode, Leaf, Node, Parent};
pub use page::{extract_title, render_page};
pub use parser::{classify, classify_with, split_blocks};
pub use span::{Span, SpanKind};

/// Parse markdown text into classified blocks using default options.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown, &MarkdownConfig::default())
}

/// Convert markdown to an element tree rooted at a `<div>`.
pub fn markdown_to_html_node(markdown: &str) -> Result<Node, Error> {
    markdown_to_html_node_with_config(markdown, &MarkdownConfig::default())
}

/// Convert markdown to an element tree with custom config.
pub fn markdown_to_html_node_with_config(
    markdown: &str,
    config: &MarkdownConfig,
) -> Result<Node, Error> {
    html::assemble(markdown, config)
}

/// Convert markdown to an HTML string using default config.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    markdown_to_html_with_config(markdown, &MarkdownConfig::default())
}

/// Convert markdown to an HTML string with custom config.
pub fn markdown_to_html_with_config(
    markdown: &str,
    config: &MarkdownConfig,
) -> Result<String, Error> {
    markdown_to_html_node_with_config(markdown, config)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_and_bold_paragraph() {
        assert_eq!(
            markdown_to_html("# Hi\n\nSome **bold** text.").unwrap(),
            "<div><h1>Hi</h1><p>Some <b>bold</b> text.</p></div>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            markdown_to_html("- one\n- two").unwrap(),
            "<div><ul><li>one</li><li>two</li></ul></div>"
        );
    }

    #[test]
    fn root_is_div() {
        let node = markdown_to_html_node("text").unwrap();
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let node = markdown_to_html_node("# A\n\n_b_ and `c`\n\n1. d\n2. e").unwrap();
        assert_eq!(node.render().unwrap(), node.render().unwrap());
    }

    #[test]
    fn errors_surface_to_caller() {
        assert_eq!(markdown_to_html(" \n\n "), Err(Error::EmptyDocument));
        assert!(matches!(
            markdown_to_html("odd `tick"),
            Err(Error::UnbalancedDelimiter { delimiter: "`", .. })
        ));
    }

    #[test]
    fn parse_uses_strict_numbering() {
        let blocks = parse("1. a\n3. b");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn lenient_numbering_via_config() {
        let config = MarkdownConfig {
            ordered_list: ListNumbering::Lenient,
        };
        assert_eq!(
            markdown_to_html_with_config("1. a\n3. b", &config).unwrap(),
            "<div><ol><li>a</li><li>b</li></ol></div>"
        );
    }
}
