use tracing::debug;

use crate::block::{Block, BlockKind};
use crate::config::{ListNumbering, MarkdownConfig};

const CODE_FENCE: &str = "```";

/// Parse markdown text into a list of classified blocks
pub fn parse(markdown: &str, config: &MarkdownConfig) -> Vec<Block> {
    let blocks: Vec<Block> = split_blocks(markdown)
        .iter()
        .map(|block| classify_with(block, config))
        .collect();
    debug!(blocks = blocks.len(), "segmented markdown document");
    blocks
}

/// Split a document on runs of blank lines.
///
/// Whitespace-only lines count as blank. Each block is trimmed at both ends;
/// line breaks inside a block are kept.
///
/// Known limitation: splitting happens before classification, so a fenced
/// code block containing a blank line becomes two blocks. Each half starts
/// or ends with a lone fence, is classified as a paragraph, and fails inline
/// tokenization with an unbalanced backtick.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            flush_block(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    blocks.push(current.join("\n").trim().to_string());
    current.clear();
}

/// Classify a block using the default (strict) list numbering.
pub fn classify(block: &str) -> Block {
    classify_with(block, &MarkdownConfig::default())
}

/// Classify a block. The first matching rule wins; anything unmatched is a
/// paragraph, so this never fails.
pub fn classify_with(block: &str, config: &MarkdownConfig) -> Block {
    let lines: Vec<&str> = block.lines().collect();

    let kind = if let [line] = lines.as_slice()
        && let Some(level) = heading_level(line)
    {
        BlockKind::Heading { level }
    } else if lines.len() >= 2 && lines[0] == CODE_FENCE && lines[lines.len() - 1] == CODE_FENCE
    {
        BlockKind::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if lines.iter().all(|line| unordered_item(line).is_some()) {
        BlockKind::UnorderedList
    } else if is_ordered_list(&lines, config.ordered_list) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };

    Block::new(kind, block)
}

/// Level of a `#`-style heading line: 1 to 6 hashes followed by a space.
pub(crate) fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Text of a heading line with its marker removed.
pub(crate) fn heading_text(line: &str, level: u8) -> &str {
    let marker = level as usize + 1;
    line.get(marker..).unwrap_or_default()
}

/// Text after a `- ` or `* ` marker.
pub(crate) fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

/// Number and text of a `<digits>. ` item.
pub(crate) fn ordered_item(line: &str) -> Option<(usize, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let text = line[digits..].strip_prefix(". ")?;
    let number = line[..digits].parse().ok()?;
    Some((number, text))
}

/// Quote line with its `>` marker and one following space removed.
pub(crate) fn quote_text(line: &str) -> &str {
    let line = line.strip_prefix('>').unwrap_or(line);
    line.strip_prefix(' ').unwrap_or(line)
}

fn is_ordered_list(lines: &[&str], numbering: ListNumbering) -> bool {
    lines.iter().enumerate().all(|(i, line)| match ordered_item(line) {
        Some((number, _)) => match numbering {
            ListNumbering::Strict => number == i + 1,
            ListNumbering::Lenient => true,
        },
        None => false,
    })
}
