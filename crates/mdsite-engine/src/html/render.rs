use crate::parsing::blocks::{
    Block, BlockKind,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
};

use super::HtmlNode;

/// Tag of the element wrapping a whole document.
pub const ROOT_TAG: &str = "div";

/// Builds the element for one block.
///
/// Leaf text keeps its inline markup; it is expanded at serialization.
/// A block that does not actually have the shape of `kind` is rendered as a
/// paragraph.
pub fn render_block(block: &str, kind: BlockKind) -> HtmlNode {
    match kind {
        BlockKind::Heading => match Heading::level(block) {
            Some(level) => HtmlNode::leaf(Heading::tag(level), "", Heading::content(block)),
            None => paragraph(block),
        },
        BlockKind::Code => match CodeFence::inner(block) {
            Some(code) => HtmlNode::parent(
                CodeFence::OUTER_TAG,
                "",
                vec![HtmlNode::leaf(CodeFence::INNER_TAG, "", code)],
            ),
            None => paragraph(block),
        },
        BlockKind::Quote => HtmlNode::leaf(BlockQuote::TAG, "", BlockQuote::strip_prefixes(block)),
        BlockKind::UnorderedList => list(
            UnorderedList::TAG,
            UnorderedList::ITEM_TAG,
            UnorderedList::items(block),
        ),
        BlockKind::OrderedList => list(
            OrderedList::TAG,
            OrderedList::ITEM_TAG,
            OrderedList::items(block),
        ),
        BlockKind::Paragraph => paragraph(block),
    }
}

/// Wraps every rendered block in the root `div`.
pub fn render_document(blocks: &[Block]) -> HtmlNode {
    let children = blocks
        .iter()
        .map(|b| render_block(&b.text, b.kind))
        .collect();
    HtmlNode::parent(ROOT_TAG, "", children)
}

fn paragraph(block: &str) -> HtmlNode {
    HtmlNode::leaf(Paragraph::TAG, "", block)
}

fn list(tag: &str, item_tag: &str, items: Vec<&str>) -> HtmlNode {
    let children = items
        .into_iter()
        .map(|item| HtmlNode::leaf(item_tag, "", item))
        .collect();
    HtmlNode::parent(tag, "", children)
}
