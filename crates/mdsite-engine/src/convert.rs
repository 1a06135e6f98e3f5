use thiserror::Error;

use crate::{
    html::render_document,
    parsing::{
        blocks::{Block, BlockKind, kinds::Heading},
        inline::{InlineTokenizer, PatternError},
        parse_document,
    },
};

/// Highest heading level accepted in strict mode.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Why a strict conversion refused a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("heading level {level} is outside 1-6: {heading:?}")]
    HeadingLevel { level: usize, heading: String },
    #[error("document has no content")]
    Empty,
}

/// Outcome of a strict conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Parsed(String),
    Rejected(Rejection),
}

impl Conversion {
    pub fn into_result(self) -> Result<String, Rejection> {
        match self {
            Conversion::Parsed(html) => Ok(html),
            Conversion::Rejected(reason) => Err(reason),
        }
    }
}

/// Converts documents with its own compiled set of inline patterns.
#[derive(Debug)]
pub struct Converter {
    tokenizer: InlineTokenizer,
}

impl Converter {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            tokenizer: InlineTokenizer::new()?,
        })
    }

    pub fn tokenizer(&self) -> &InlineTokenizer {
        &self.tokenizer
    }

    /// Renders already classified blocks inside the root `div`.
    pub fn render(&self, blocks: &[Block]) -> String {
        render_document(blocks).to_html_with(self.tokenizer())
    }

    /// Converts a document. Never fails: unknown shapes become paragraphs and
    /// unmatched markup stays as text.
    pub fn convert(&self, document: &str) -> String {
        self.render(&parse_document(document))
    }

    /// Like [`Converter::convert`] but rejects documents with no blocks or
    /// with headings deeper than [`MAX_HEADING_LEVEL`].
    pub fn convert_strict(&self, document: &str) -> Conversion {
        let blocks = parse_document(document);
        match check(&blocks) {
            Ok(()) => Conversion::Parsed(self.render(&blocks)),
            Err(reason) => Conversion::Rejected(reason),
        }
    }
}

fn check(blocks: &[Block]) -> Result<(), Rejection> {
    if blocks.is_empty() {
        return Err(Rejection::Empty);
    }
    for block in blocks.iter().filter(|b| b.kind == BlockKind::Heading) {
        if let Some(level) = Heading::level(&block.text)
            && level > MAX_HEADING_LEVEL
        {
            return Err(Rejection::HeadingLevel {
                level,
                heading: Heading::content(&block.text).to_string(),
            });
        }
    }
    Ok(())
}
