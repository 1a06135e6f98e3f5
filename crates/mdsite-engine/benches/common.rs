// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- Another [link](https://example.com)\n\n1. First\n2. Second\n\n> Quoted ![image](a.png)\n\n```\nfn example() {}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_line(segments: usize) -> String {
    (0..segments)
        .map(|i| match i % 5 {
            0 => format!("word{i} **bold{i}** "),
            1 => format!("*italic{i}* "),
            2 => format!("`code{i}` "),
            3 => format!("![img{i}](i{i}.png) "),
            _ => format!("[link{i}](l{i}.html) "),
        })
        .collect()
}
