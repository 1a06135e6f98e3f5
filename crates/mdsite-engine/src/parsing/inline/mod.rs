//! # Inline Parsing
//!
//! Regex-driven splitting of a leaf's raw text into typed spans.
//!
//! ## Architecture
//!
//! Tokenizing starts from a single plain span and runs five passes in a
//! fixed order: bold, italic, inline code, image, link. Each pass only looks
//! at spans that are still plain. Its pattern has a greedy prefix, so on each
//! line the last construct matches first; the prefix is then searched again
//! until nothing is left, while the suffix stays plain. A stray `*` earlier
//! on the line therefore never pairs with a real delimiter after it. Spans produced by an
//! earlier pass are never rescanned, so markup inside `**...**` stays literal.
//!
//! ## Modules
//!
//! - **`types`**: `TypedSpan` and `SpanKind`, plus the HTML form of a span
//! - **`kinds`**: Delimiters and patterns owned by each inline construct
//! - **`tokenizer`**: `InlineTokenizer` and the process-wide `tokenize()`
//!
//! ## Pass Order
//!
//! Bold precedes italic because both use `*`. Image precedes link because
//! `![alt](url)` contains a link-shaped `[alt](url)`.

pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use tokenizer::{InlineTokenizer, PatternError, default_tokenizer, render_inline, tokenize};
pub use types::{SpanKind, TypedSpan};
