use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Assigns a [`BlockKind`] to one block's raw text.
///
/// Checks run in priority order and the first match wins: heading, code,
/// quote, unordered list, ordered list. Anything else is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    let kind = if Heading::level(block).is_some() {
        BlockKind::Heading
    } else if CodeFence::encloses(block) {
        BlockKind::Code
    } else if BlockQuote::is_quote(block) {
        BlockKind::Quote
    } else if UnorderedList::is_list(block) {
        BlockKind::UnorderedList
    } else if OrderedList::is_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };
    log::debug!("classified block as {kind}: {:?}", preview(block));
    kind
}

fn preview(block: &str) -> &str {
    let end = block
        .char_indices()
        .nth(40)
        .map_or(block.len(), |(i, _)| i);
    &block[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", BlockKind::Heading)]
    #[case("###### Six", BlockKind::Heading)]
    #[case("```\nx\n```", BlockKind::Code)]
    #[case("> a\n> b", BlockKind::Quote)]
    #[case("* a\n* b", BlockKind::UnorderedList)]
    #[case("- a\n- b", BlockKind::UnorderedList)]
    #[case("1. a\n2. b", BlockKind::OrderedList)]
    #[case("plain line", BlockKind::Paragraph)]
    #[case("", BlockKind::Paragraph)]
    fn classifies(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn heading_wins_over_everything() {
        assert_eq!(classify("# > not a quote\n> q"), BlockKind::Heading);
    }

    #[test]
    fn heading_marker_must_open_the_block() {
        assert_eq!(classify("text\n# later heading"), BlockKind::Paragraph);
    }

    #[test]
    fn code_wins_over_list_lookalikes() {
        assert_eq!(classify("```\n- a\n- b\n```"), BlockKind::Code);
    }

    #[test]
    fn dash_list_with_stray_line_is_a_paragraph() {
        // Every line is checked against both markers, not only the first.
        assert_eq!(classify("- item\nstray"), BlockKind::Paragraph);
    }

    #[test]
    fn ordered_list_with_gap_is_a_paragraph() {
        assert_eq!(classify("1. a\n3. b"), BlockKind::Paragraph);
    }

    #[test]
    fn names() {
        assert_eq!(BlockKind::UnorderedList.to_string(), "UNORDERED_LIST");
        assert_eq!(BlockKind::Paragraph.name(), "PARAGRAPH");
    }
}
