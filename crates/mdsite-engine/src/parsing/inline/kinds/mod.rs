//! # Inline Kinds
//!
//! Each inline construct owns its delimiters and the regular expression built
//! from them. The tokenizer only ever asks a kind for its pattern; it never
//! hardcodes `**` or `[`.
//!
//! ## Types
//!
//! - **`Bold`**: `**content**`
//! - **`Italic`**: `*content*`
//! - **`CodeSpan`**: `` `content` ``
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};

/// Capture group holding the text before a match.
pub(crate) const PREFIX_GROUP: usize = 1;
/// Capture group holding a construct's visible text.
pub(crate) const CONTENT_GROUP: usize = 2;

/// Pattern for `prefix<delim>content<delim>suffix` with at least one content
/// character.
///
/// The prefix is greedy, so on a line holding several pairs the last one
/// matches and the prefix still has to be searched for the rest. None of the
/// groups cross a line break.
pub(crate) fn delimited_pattern(delimiter: &str) -> String {
    let d = regex::escape(delimiter);
    format!("(.*){d}(.+){d}(.*)")
}
