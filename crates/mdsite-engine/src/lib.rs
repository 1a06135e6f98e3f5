//! Markdown-to-HTML conversion for mdsite.
//!
//! A document goes through four steps: it is segmented into blocks on blank
//! lines, each block is classified, each block is rendered into an
//! [`HtmlNode`], and the tree under a root `div` is serialized. Inline markup
//! in leaf text is tokenized only during serialization.
//!
//! The pipeline works on in-memory strings. [`io`] and [`site`] are the only
//! modules that touch the filesystem.

pub mod convert;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

pub use convert::{Conversion, Converter, Rejection};
pub use html::HtmlNode;
pub use parsing::blocks::{Block, BlockKind};
pub use parsing::inline::{InlineTokenizer, PatternError, SpanKind, TypedSpan, tokenize};

use parsing::{blocks, inline::default_tokenizer};

/// Splits a document into raw block strings.
pub fn markdown_to_blocks(document: &str) -> Vec<String> {
    blocks::segment(document)
}

/// Classifies and renders raw blocks, returning the serialized root `div`.
pub fn blocks_to_html<S: AsRef<str>>(raw_blocks: &[S]) -> String {
    let classified: Vec<Block> = raw_blocks
        .iter()
        .map(|raw| {
            let text = raw.as_ref();
            Block {
                text: text.to_string(),
                kind: blocks::classify(text),
            }
        })
        .collect();
    html::render_document(&classified).to_html_with(default_tokenizer())
}

/// Converts a whole document to an HTML string.
pub fn markdown_to_html(document: &str) -> String {
    blocks_to_html(&markdown_to_blocks(document))
}
