use std::fmt;

use crate::parsing::inline::{InlineTokenizer, default_tokenizer, render_inline};

/// One node of the output HTML tree.
///
/// Leaf text is raw inline markup; it is tokenized when the node is
/// serialized, not when it is built. Attributes are inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: String,
        attrs: String,
        text: String,
    },
    Parent {
        tag: String,
        attrs: String,
        children: Vec<HtmlNode>,
    },
}

impl HtmlNode {
    pub fn leaf(tag: impl Into<String>, attrs: impl Into<String>, text: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: tag.into(),
            attrs: attrs.into(),
            text: text.into(),
        }
    }

    /// A parent with no children is still a parent and renders as `<tag></tag>`.
    pub fn parent(tag: impl Into<String>, attrs: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            attrs: attrs.into(),
            children,
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag,
        }
    }

    pub fn attrs(&self) -> &str {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Child nodes; always empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Serializes the tree depth-first, expanding leaf text with `tokenizer`.
    pub fn write_html<W: fmt::Write>(&self, tokenizer: &InlineTokenizer, out: &mut W) -> fmt::Result {
        self.write_open(out)?;
        match self {
            HtmlNode::Leaf { text, .. } => out.write_str(&render_inline(tokenizer, text))?,
            HtmlNode::Parent { children, .. } => {
                for child in children {
                    child.write_html(tokenizer, out)?;
                }
            }
        }
        write!(out, "</{}>", self.tag())
    }

    pub fn to_html_with(&self, tokenizer: &InlineTokenizer) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_html(tokenizer, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        self.to_html_with(default_tokenizer())
    }

    /// Structural debug form, without inline expansion.
    pub fn describe(&self) -> String {
        match self {
            HtmlNode::Leaf { tag, attrs, text } => {
                format!("LeafNode{{\"<{tag}>\", attrs={attrs}, value=\"{text}\"}}")
            }
            HtmlNode::Parent {
                tag,
                attrs,
                children,
            } => {
                let children = children
                    .iter()
                    .map(HtmlNode::describe)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("ParentNode{{\"<{tag}>\", attrs={attrs}, children=[{children}]}}")
            }
        }
    }

    /// `<tag>` without attributes, `<tag attrs>` with them.
    fn write_open<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if self.attrs().is_empty() {
            write!(out, "<{}>", self.tag())
        } else {
            write!(out, "<{} {}>", self.tag(), self.attrs())
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(default_tokenizer(), f)
    }
}
