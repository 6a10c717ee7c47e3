//! Page-level helpers: title extraction and template filling.

use crate::block::BlockKind;
use crate::config::MarkdownConfig;
use crate::error::Error;
use crate::html;
use crate::parser::{self, heading_text};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Text of the first level-1 heading.
pub fn extract_title(markdown: &str) -> Result<String, Error> {
    parser::parse(markdown, &MarkdownConfig::default())
        .into_iter()
        .find(|block| block.kind == BlockKind::Heading { level: 1 })
        .and_then(|block| block.lines.into_iter().next())
        .map(|line| heading_text(&line, 1).trim().to_string())
        .ok_or(Error::NoTitle)
}

/// Render a markdown page into `template`, replacing the title and content
/// placeholders.
///
/// Nothing is returned unless both the body and the title succeed.
pub fn render_page(
    markdown: &str,
    template: &str,
    config: &MarkdownConfig,
) -> Result<String, Error> {
    let content = html::assemble(markdown, config)?.render()?;
    let title = extract_title(markdown)?;

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}
