/// Structural kind of a block of markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading { level: u8 },
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A classified run of non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub lines: Vec<String>,
}

impl Block {
    pub fn new(kind: BlockKind, text: &str) -> Self {
        Self {
            kind,
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}
