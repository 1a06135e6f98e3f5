use super::delimited_pattern;

/// Strong emphasis, rendered as `<b>`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";

    pub fn pattern() -> String {
        delimited_pattern(Self::DELIMITER)
    }
}

/// Emphasis, rendered as `<i>`.
///
/// Shares its delimiter character with [`Bold`], so bold must be split out
/// first or `**x**` would come back as italic `*x*`.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "*";

    pub fn pattern() -> String {
        delimited_pattern(Self::DELIMITER)
    }
}
