use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

use super::{
    kinds::{
        Bold, CONTENT_GROUP, CodeSpan, Image, Italic, Link, PREFIX_GROUP, link::TARGET_GROUP,
    },
    types::{SpanKind, TypedSpan},
};

/// A built-in inline pattern failed to compile.
///
/// Only reachable through a bad pattern constant, never through document
/// content.
#[derive(Debug, Error)]
#[error("invalid {pass} pattern: {source}")]
pub struct PatternError {
    pub pass: &'static str,
    #[source]
    pub source: regex::Error,
}

/// What a pass turns its matches into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassKind {
    Bold,
    Italic,
    Code,
    Image,
    Link,
}

impl PassKind {
    fn name(self) -> &'static str {
        match self {
            PassKind::Bold => "bold",
            PassKind::Italic => "italic",
            PassKind::Code => "code",
            PassKind::Image => "image",
            PassKind::Link => "link",
        }
    }

    fn pattern(self) -> String {
        match self {
            PassKind::Bold => Bold::pattern(),
            PassKind::Italic => Italic::pattern(),
            PassKind::Code => CodeSpan::pattern(),
            PassKind::Image => Image::pattern(),
            PassKind::Link => Link::pattern(),
        }
    }

    fn span(self, caps: &Captures<'_>) -> TypedSpan {
        let kind = match self {
            PassKind::Bold => SpanKind::Bold,
            PassKind::Italic => SpanKind::Italic,
            PassKind::Code => SpanKind::Code,
            PassKind::Image => SpanKind::Image {
                target: group(caps, TARGET_GROUP).to_string(),
            },
            PassKind::Link => SpanKind::Link {
                target: group(caps, TARGET_GROUP).to_string(),
            },
        };
        TypedSpan::new(group(caps, CONTENT_GROUP), kind)
    }
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn push_plain(out: &mut Vec<TypedSpan>, text: &str) {
    if !text.is_empty() {
        out.push(TypedSpan::plain(text));
    }
}

/// Pass order. Bold before italic because both use `*`; image before link
/// because an image is a link with a leading `!`.
const PASS_ORDER: [PassKind; 5] = [
    PassKind::Bold,
    PassKind::Italic,
    PassKind::Code,
    PassKind::Image,
    PassKind::Link,
];

#[derive(Debug)]
struct Pass {
    kind: PassKind,
    regex: Regex,
}

impl Pass {
    /// Splits one plain run into plain text and matched spans.
    ///
    /// Patterns never cross a line break, so each match covers the rest of
    /// its line. Text between matches is kept as plain text.
    fn split_into(&self, text: &str, out: &mut Vec<TypedSpan>) {
        let mut rest = 0;
        while let Some(caps) = self.regex.captures_at(text, rest) {
            let Some(whole) = caps.get(0) else { break };
            push_plain(out, &text[rest..whole.start()]);
            self.split_line(&caps, out);
            rest = whole.end();
        }
        push_plain(out, &text[rest..]);
    }

    /// Expands one line-level match. The greedy prefix means `caps` holds the
    /// last construct on the line; the prefix is searched again until nothing
    /// matches, and suffixes are never rescanned.
    fn split_line(&self, caps: &Captures<'_>, out: &mut Vec<TypedSpan>) {
        let mut reversed = Vec::new();
        let mut prefix = self.take(caps, &mut reversed);
        while let Some(inner) = self.regex.captures(prefix) {
            prefix = self.take(&inner, &mut reversed);
        }
        push_plain(out, prefix);
        out.extend(reversed.into_iter().rev());
    }

    /// Pushes the suffix, then the matched span, and returns the prefix.
    fn take<'t>(&self, caps: &Captures<'t>, reversed: &mut Vec<TypedSpan>) -> &'t str {
        push_plain(reversed, group(caps, caps.len() - 1));
        reversed.push(self.kind.span(caps));
        group(caps, PREFIX_GROUP)
    }
}

/// Turns a run of inline markup into an ordered sequence of [`TypedSpan`]s.
///
/// Patterns are compiled once in [`InlineTokenizer::new`]; tokenizing itself
/// cannot fail. Unterminated or empty delimiters stay as plain text.
#[derive(Debug)]
pub struct InlineTokenizer {
    passes: Vec<Pass>,
}

impl InlineTokenizer {
    pub fn new() -> Result<Self, PatternError> {
        let passes = PASS_ORDER
            .iter()
            .map(|&kind| {
                Regex::new(&kind.pattern())
                    .map(|regex| Pass { kind, regex })
                    .map_err(|source| PatternError {
                        pass: kind.name(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { passes })
    }

    /// Tokenizes `text`. Concatenating the spans' text in order gives back
    /// the input minus the markup delimiters.
    pub fn tokenize(&self, text: &str) -> Vec<TypedSpan> {
        let mut spans = vec![TypedSpan::plain(text)];
        if text.is_empty() {
            return spans;
        }

        for pass in &self.passes {
            let mut next = Vec::with_capacity(spans.len());
            for span in spans {
                if span.kind.is_plain() {
                    pass.split_into(&span.text, &mut next);
                } else {
                    next.push(span);
                }
            }
            log::trace!("{} pass: {} spans", pass.kind.name(), next.len());
            spans = next;
        }

        spans
    }
}

/// Process-wide tokenizer built from the built-in patterns on first use.
pub fn default_tokenizer() -> &'static InlineTokenizer {
    static TOKENIZER: OnceLock<InlineTokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(|| InlineTokenizer::new().expect("Invalid built-in inline pattern"))
}

/// Tokenizes `text` with the [`default_tokenizer`].
pub fn tokenize(text: &str) -> Vec<TypedSpan> {
    default_tokenizer().tokenize(text)
}

/// Tokenizes `text` and concatenates the HTML form of every span.
pub fn render_inline(tokenizer: &InlineTokenizer, text: &str) -> String {
    tokenizer
        .tokenize(text)
        .iter()
        .map(TypedSpan::to_html)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(spans: &[TypedSpan]) -> Vec<&'static str> {
        spans.iter().map(|s| s.kind.name()).collect()
    }

    #[test]
    fn plain_text_is_one_span() {
        let spans = tokenize("plain text");
        assert_eq!(spans, vec![TypedSpan::plain("plain text")]);
    }

    #[test]
    fn empty_text_is_one_empty_span() {
        assert_eq!(tokenize(""), vec![TypedSpan::plain("")]);
    }

    #[test]
    fn bold_in_the_middle() {
        assert_eq!(
            tokenize("a **b** c"),
            vec![
                TypedSpan::plain("a "),
                TypedSpan::new("b", SpanKind::Bold),
                TypedSpan::plain(" c"),
            ]
        );
    }

    #[test]
    fn bold_before_italic_keeps_italics_intact() {
        let spans = tokenize("*a* **b** *c*");
        assert_eq!(
            kinds(&spans),
            vec!["ITALIC", "TEXT", "BOLD", "TEXT", "ITALIC"]
        );
        assert_eq!(spans[0].text, "a");
        assert_eq!(spans[2].text, "b");
        assert_eq!(spans[4].text, "c");
    }

    #[test]
    fn repeated_markup_on_one_line() {
        let spans = tokenize(
            "I *have* **many** *blocks* of **stylized text** `within` this `one string` with **bolded**",
        );
        assert_eq!(spans.len(), 14);
        let count = |name| spans.iter().filter(|s| s.kind.name() == name).count();
        assert_eq!(count("TEXT"), 7);
        assert_eq!(count("BOLD"), 3);
        assert_eq!(count("ITALIC"), 2);
        assert_eq!(count("CODE_TEXT"), 2);
    }

    #[test]
    fn mixed_sentence() {
        let spans =
            tokenize("This has *italic text*, **bold** text, and `a little bit of code`.");
        assert_eq!(
            kinds(&spans),
            vec!["TEXT", "ITALIC", "TEXT", "BOLD", "TEXT", "CODE_TEXT", "TEXT"]
        );
    }

    #[test]
    fn link_alone() {
        assert_eq!(
            tokenize("[i am link](https://www.google.com)"),
            vec![TypedSpan::new(
                "i am link",
                SpanKind::Link {
                    target: "https://www.google.com".into()
                }
            )]
        );
    }

    #[test]
    fn image_is_not_taken_as_link() {
        assert_eq!(
            tokenize("![i am image](https://picsum.photos/200/300)"),
            vec![TypedSpan::new(
                "i am image",
                SpanKind::Image {
                    target: "https://picsum.photos/200/300".into()
                }
            )]
        );
    }

    #[test]
    fn image_and_link_in_one_line() {
        let spans = tokenize("an ![image](a.png) and a [link](b.html)");
        assert_eq!(kinds(&spans), vec!["TEXT", "IMAGE", "TEXT", "LINK"]);
        assert_eq!(spans[1].target(), "a.png");
        assert_eq!(spans[3].target(), "b.html");
    }

    #[rstest]
    #[case("an *unterminated italic")]
    #[case("an **unterminated bold")]
    #[case("a `dangling tick")]
    #[case("empty ** bold")]
    #[case("empty `` code")]
    #[case("[no url]")]
    #[case("[](empty-label)")]
    fn malformed_markup_stays_plain(#[case] text: &str) {
        assert_eq!(tokenize(text), vec![TypedSpan::plain(text)]);
    }

    #[rstest]
    #[case(
        "5 * 3 = 15 and *emph*",
        vec![TypedSpan::plain("5 * 3 = 15 and "), TypedSpan::new("emph", SpanKind::Italic)]
    )]
    #[case(
        "2**10 and **b**",
        vec![TypedSpan::plain("2**10 and "), TypedSpan::new("b", SpanKind::Bold)]
    )]
    #[case(
        "[x] and [y](z)",
        vec![
            TypedSpan::plain("[x] and "),
            TypedSpan::new("y", SpanKind::Link { target: "z".into() }),
        ]
    )]
    #[case(
        "Price: 2**10 bytes, **really** big",
        vec![
            TypedSpan::plain("Price: 2**10 bytes, "),
            TypedSpan::new("really", SpanKind::Bold),
            TypedSpan::plain(" big"),
        ]
    )]
    fn stray_delimiter_before_a_pair(#[case] text: &str, #[case] expected: Vec<TypedSpan>) {
        assert_eq!(tokenize(text), expected);
    }

    #[test]
    fn stray_star_renders_literally() {
        assert_eq!(
            render_inline(default_tokenizer(), "5 * 3 = 15 and *emph*"),
            "5 * 3 = 15 and <i>emph</i>"
        );
    }

    #[test]
    fn unbalanced_pairs_pair_from_the_right() {
        assert_eq!(
            tokenize("**a**b**"),
            vec![TypedSpan::plain("**a"), TypedSpan::new("b", SpanKind::Bold)]
        );
    }

    #[test]
    fn every_line_is_split() {
        let spans = tokenize("line *one*\nline *two*");
        assert_eq!(
            spans.iter().filter(|s| s.kind == SpanKind::Italic).count(),
            2
        );
        assert_eq!(
            spans.iter().map(TypedSpan::to_html).collect::<String>(),
            "line <i>one</i>\nline <i>two</i>"
        );
    }

    #[test]
    fn formatted_spans_are_not_rescanned() {
        let spans = tokenize("**bold with *star* inside**");
        assert_eq!(
            spans,
            vec![TypedSpan::new("bold with *star* inside", SpanKind::Bold)]
        );
    }

    #[test]
    fn code_content_keeps_asterisks_from_later_passes() {
        // A lone `*` has no partner for the italic pass.
        let spans = tokenize("`a*b` c");
        assert_eq!(kinds(&spans), vec!["CODE_TEXT", "TEXT"]);
        assert_eq!(spans[0].text, "a*b");
    }

    #[test]
    fn render_inline_concatenates_html() {
        let tokenizer = InlineTokenizer::new().unwrap();
        assert_eq!(
            render_inline(&tokenizer, "a **b** [c](d)"),
            "a <b>b</b> <a href=\"d\">c</a>"
        );
    }
}
