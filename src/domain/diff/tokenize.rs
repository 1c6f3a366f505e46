// src/domain/diff/tokenize.rs

/// Splits text into lines, each keeping its terminator (`\n` or `\r\n`),
/// so the lines concatenate back to the exact input.
pub(crate) fn lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Splits a line into word tokens: a run of non-whitespace followed by the
/// whitespace after it. Leading whitespace forms a token of its own, so the
/// tokens always concatenate back to the line.
pub(crate) fn words(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut after_space = false;

    for (index, ch) in line.char_indices() {
        if ch.is_whitespace() {
            after_space = true;
        } else if after_space {
            tokens.push(&line[start..index]);
            start = index;
            after_space = false;
        }
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }
    tokens
}
