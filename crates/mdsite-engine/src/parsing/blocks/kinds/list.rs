/// Unordered list type with owned item markers.
///
/// Each line is checked on its own, so `* ` and `- ` items may be mixed
/// within one list.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];
    pub const TAG: &'static str = "ul";
    pub const ITEM_TAG: &'static str = "li";

    pub fn is_item(line: &str) -> bool {
        Self::MARKERS.iter().any(|m| line.starts_with(m))
    }

    pub fn is_list(chunk: &str) -> bool {
        chunk.split('\n').all(Self::is_item)
    }

    /// Item lines with their markers removed.
    pub fn items(chunk: &str) -> Vec<&str> {
        chunk
            .split('\n')
            .map(|line| {
                Self::MARKERS
                    .iter()
                    .find_map(|m| line.strip_prefix(m))
                    .unwrap_or(line)
            })
            .collect()
    }
}

/// Ordered list type.
///
/// Items must be numbered `1. `, `2. `, ... with no gaps.
pub struct OrderedList;

impl OrderedList {
    pub const TAG: &'static str = "ol";
    pub const ITEM_TAG: &'static str = "li";

    pub fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    pub fn is_list(chunk: &str) -> bool {
        chunk
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Item lines with their numbered markers removed.
    pub fn items(chunk: &str) -> Vec<&str> {
        chunk
            .split('\n')
            .enumerate()
            .map(|(i, line)| line.strip_prefix(&Self::marker(i + 1)).unwrap_or(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unordered_accepts_both_markers() {
        assert!(UnorderedList::is_list("* a\n* b"));
        assert!(UnorderedList::is_list("- a\n- b"));
        assert!(UnorderedList::is_list("- a\n* b"));
    }

    #[test]
    fn unordered_checks_every_line() {
        assert!(!UnorderedList::is_list("- a\nnot an item"));
        assert!(!UnorderedList::is_list("* a\nnot an item"));
    }

    #[test]
    fn unordered_items() {
        assert_eq!(UnorderedList::items("- li1\n* li2"), vec!["li1", "li2"]);
    }

    #[test]
    fn ordered_requires_sequence_from_one() {
        assert!(OrderedList::is_list("1. a\n2. b\n3. c"));
        assert!(!OrderedList::is_list("2. a\n3. b"));
        assert!(!OrderedList::is_list("1. a\n3. b"));
        assert!(!OrderedList::is_list("1.a"));
    }

    #[test]
    fn ordered_items_strip_whole_marker() {
        let chunk = (1..=10)
            .map(|n| format!("{n}. item {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let items = OrderedList::items(&chunk);
        assert_eq!(items[0], "item 1");
        assert_eq!(items[9], "item 10");
    }
}
