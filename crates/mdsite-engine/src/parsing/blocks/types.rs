use std::fmt;

/// The structural category of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other kind matches.
    Paragraph,
    /// `#`-prefixed heading of any level.
    Heading,
    /// Block fenced with ``` on both ends.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in order.
    OrderedList,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "PARAGRAPH",
            BlockKind::Heading => "HEADING",
            BlockKind::Code => "CODE",
            BlockKind::Quote => "QUOTE",
            BlockKind::UnorderedList => "UNORDERED_LIST",
            BlockKind::OrderedList => "ORDERED_LIST",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One segmented block and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Raw block text, lines joined with `\n`, markers still in place.
    pub text: String,
    pub kind: BlockKind,
}
