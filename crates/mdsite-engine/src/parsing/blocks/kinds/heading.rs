/// ATX heading type with owned marker constant.
///
/// A heading block starts with one or more `#` followed by a single space.
/// The number of `#` is the level; levels above 6 are not rejected here.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// `h<level>`, unclamped.
    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }

    /// Returns the heading level if `chunk` opens with `#+ `.
    pub fn level(chunk: &str) -> Option<usize> {
        let hashes = chunk.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes > 0 && chunk[hashes..].starts_with(' ') {
            Some(hashes)
        } else {
            None
        }
    }

    /// Text after the marker and its following space.
    pub fn content(chunk: &str) -> &str {
        match Self::level(chunk) {
            Some(level) => &chunk[level + 1..],
            None => chunk,
        }
    }
}
