/// Characters allowed in a link label or URL: anything but brackets and
/// parentheses. Nested parenthetical URLs are therefore not supported.
const BODY: &str = r"[^\[\]()]+";

/// `[text](url)`, rendered as `<a href="url">text</a>`.
pub struct Link;

/// Capture group holding the URL of a link or image.
pub(crate) const TARGET_GROUP: usize = 3;

/// `prefix<lead>[label](url)suffix`, with the same greedy prefix as the
/// delimited kinds.
fn bracketed_pattern(lead: &str) -> String {
    format!(r"(.*){lead}\[({BODY})\]\(({BODY})\)(.*)")
}

impl Link {
    pub fn pattern() -> String {
        bracketed_pattern("")
    }
}

/// `![alt](url)`, rendered as `<img src="url" alt="alt" />`.
///
/// Must be split out before [`Link`], otherwise the bracket part is taken
/// as a link and the `!` is left behind as text.
pub struct Image;

impl Image {
    pub const BANG: &'static str = "!";

    pub fn pattern() -> String {
        bracketed_pattern(&regex::escape(Self::BANG))
    }
}
