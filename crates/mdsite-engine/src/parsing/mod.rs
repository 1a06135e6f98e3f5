pub mod blocks;
pub mod inline;

use blocks::{Block, classify, segment};

/// Segments a document and classifies every block.
pub fn parse_document(document: &str) -> Vec<Block> {
    segment(document)
        .into_iter()
        .map(|text| {
            let kind = classify(&text);
            Block { text, kind }
        })
        .collect()
}
