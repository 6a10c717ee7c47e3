use crate::block::{Block, BlockKind};
use crate::config::MarkdownConfig;
use crate::error::Error;
use crate::inline::tokenize;
use crate::node::{Attributes, Node};
use crate::parser::{self, heading_text, ordered_item, quote_text, unordered_item};
use crate::span::{Span, SpanKind};

/// Assemble a markdown document into a tree rooted at a `<div>`.
///
/// Fails with [`Error::EmptyDocument`] when the document has no blocks.
pub fn assemble(markdown: &str, config: &MarkdownConfig) -> Result<Node, Error> {
    let children = parser::parse(markdown, config)
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>, _>>()?;

    if children.is_empty() {
        return Err(Error::EmptyDocument);
    }
    Node::parent("div", children)
}

/// Convert one inline span to a leaf node.
pub fn span_to_node(span: &Span) -> Node {
    match span.kind() {
        SpanKind::Plain => Node::text(span.text()),
        SpanKind::Bold => Node::leaf("b", span.text()),
        SpanKind::Italic => Node::leaf("i", span.text()),
        SpanKind::Code => Node::leaf("code", span.text()),
        SpanKind::Link => Node::leaf_with(
            "a",
            span.text(),
            Attributes::new().with("href", span.target().unwrap_or_default()),
        ),
        SpanKind::Image => Node::leaf_with(
            "img",
            "",
            Attributes::new()
                .with("src", span.target().unwrap_or_default())
                .with("alt", span.text()),
        ),
    }
}

fn block_to_node(block: &Block) -> Result<Node, Error> {
    match block.kind {
        BlockKind::Paragraph => Node::parent("p", inline_nodes(&block.lines.join(" "))?),
        BlockKind::Heading { level } => {
            let line = block.lines.first().map(String::as_str).unwrap_or_default();
            Node::parent(
                &format!("h{level}"),
                inline_nodes(heading_text(line, level))?,
            )
        }
        BlockKind::Code => {
            // Fence lines are dropped; the body is kept verbatim.
            let body = block
                .lines
                .get(1..block.lines.len().saturating_sub(1))
                .unwrap_or_default();
            let mut text = body.join("\n");
            text.push('\n');
            let code = Node::parent("code", vec![Node::text(text)])?;
            Node::parent("pre", vec![code])
        }
        BlockKind::Quote => {
            let text = block
                .lines
                .iter()
                .map(|line| quote_text(line))
                .collect::<Vec<_>>()
                .join(" ");
            Node::parent("blockquote", inline_nodes(&text)?)
        }
        BlockKind::UnorderedList => list_node("ul", &block.lines, unordered_item),
        BlockKind::OrderedList => list_node("ol", &block.lines, ordered_item_text),
    }
}

fn list_node(
    tag: &str,
    lines: &[String],
    item_text: fn(&str) -> Option<&str>,
) -> Result<Node, Error> {
    let items = lines
        .iter()
        .map(|line| {
            let text = item_text(line).unwrap_or(line.as_str());
            Node::parent("li", inline_nodes(text)?)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Node::parent(tag, items)
}

fn ordered_item_text(line: &str) -> Option<&str> {
    ordered_item(line).map(|(_, text)| text)
}

/// Tokenize inline text into leaves. Text with no spans yields one empty
/// leaf so the enclosing element always has a child.
fn inline_nodes(text: &str) -> Result<Vec<Node>, Error> {
    let nodes: Vec<Node> = tokenize(text)?.iter().map(span_to_node).collect();
    if nodes.is_empty() {
        return Ok(vec![Node::text("")]);
    }
    Ok(nodes)
}
