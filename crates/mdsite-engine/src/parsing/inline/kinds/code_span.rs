use super::delimited_pattern;

/// Inline code, rendered as `<code>`.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: &'static str = "`";

    pub fn pattern() -> String {
        delimited_pattern(Self::TICK)
    }
}
