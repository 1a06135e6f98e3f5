/// Fenced code block type.
///
/// The whole block must open and close with a backtick fence; the fences are
/// stripped verbatim, so an info string after the opening fence stays in
/// the content.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const OUTER_TAG: &'static str = "pre";
    pub const INNER_TAG: &'static str = "code";

    pub fn encloses(chunk: &str) -> bool {
        chunk.len() >= 2 * Self::BACKTICKS.len()
            && chunk.starts_with(Self::BACKTICKS)
            && chunk.ends_with(Self::BACKTICKS)
    }

    /// Content between the fences, or `None` if `chunk` is not fenced.
    pub fn inner(chunk: &str) -> Option<&str> {
        if !Self::encloses(chunk) {
            return None;
        }
        chunk
            .strip_prefix(Self::BACKTICKS)
            .and_then(|rest| rest.strip_suffix(Self::BACKTICKS))
    }
}
