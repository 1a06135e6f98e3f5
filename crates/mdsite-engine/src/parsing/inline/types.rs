use std::fmt;

/// The formatting applied to one run of inline text.
///
/// Links and images carry their target URL inside the variant, so a span can
/// only have a target when it is one of those two kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// Text with no inline markup.
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link { target: String },
    /// `![alt](url)`
    Image { target: String },
}

impl SpanKind {
    /// Upper-case label used in debug output.
    pub fn name(&self) -> &'static str {
        match self {
            SpanKind::Plain => "TEXT",
            SpanKind::Bold => "BOLD",
            SpanKind::Italic => "ITALIC",
            SpanKind::Code => "CODE_TEXT",
            SpanKind::Link { .. } => "LINK",
            SpanKind::Image { .. } => "IMAGE",
        }
    }

    /// The HTML element this kind renders as. Plain text has none.
    pub fn tag(&self) -> &'static str {
        match self {
            SpanKind::Plain => "",
            SpanKind::Bold => "b",
            SpanKind::Italic => "i",
            SpanKind::Code => "code",
            SpanKind::Link { .. } => "a",
            SpanKind::Image { .. } => "img",
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, SpanKind::Plain)
    }
}

/// One contiguous run of inline text and its formatting.
///
/// Spans are produced by the tokenizer and consumed straight away by
/// rendering; they are never stored back into the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl TypedSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    /// URL of a link or image span, empty for every other kind.
    pub fn target(&self) -> &str {
        match &self.kind {
            SpanKind::Link { target } | SpanKind::Image { target } => target,
            _ => "",
        }
    }

    /// Writes this span's HTML form.
    pub fn write_html<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match &self.kind {
            SpanKind::Plain => out.write_str(&self.text),
            SpanKind::Bold => write!(out, "<b>{}</b>", self.text),
            SpanKind::Italic => write!(out, "<i>{}</i>", self.text),
            SpanKind::Code => write!(out, "<code>{}</code>", self.text),
            SpanKind::Link { target } => write!(out, "<a href=\"{target}\">{}</a>", self.text),
            SpanKind::Image { target } => {
                write!(out, "<img src=\"{target}\" alt=\"{}\" />", self.text)
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut out);
        out
    }
}

impl fmt::Display for TypedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypedSpan{{\"{}\", {}, url=\"{}\"}}",
            self.text,
            self.kind.name(),
            self.target()
        )
    }
}
