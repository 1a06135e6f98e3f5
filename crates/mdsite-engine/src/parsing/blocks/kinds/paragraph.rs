/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// block kind matches, and their text is kept verbatim.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
