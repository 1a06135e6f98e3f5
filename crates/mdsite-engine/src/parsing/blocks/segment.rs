/// Splits a document into blocks on blank lines.
///
/// Consecutive non-blank lines are joined with `\n` into one block; runs of
/// blank (or whitespace-only) lines end the current block and are dropped.
/// Line endings may be `\n` or `\r\n`; line content is otherwise kept as is.
pub fn segment(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}
