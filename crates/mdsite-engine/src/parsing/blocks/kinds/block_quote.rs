/// Blockquote block type with owned prefix constant.
///
/// Every line of a quote block carries the prefix; there is no lazy
/// continuation and no nesting.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";
    pub const TAG: &'static str = "blockquote";

    pub fn is_quote(chunk: &str) -> bool {
        chunk.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Drops the prefix from every line and rejoins them.
    pub fn strip_prefixes(chunk: &str) -> String {
        chunk
            .split('\n')
            .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
