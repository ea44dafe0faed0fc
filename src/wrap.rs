/// Greedy word-wrapping for indented reasoning display
use unicode_width::UnicodeWidthStr;

/// Wrap `text` into lines no wider than `width` display columns.
///
/// Words are packed greedily: a word moves to the next line only when
/// appending it (with a separating space) would overflow. Word order and
/// content are preserved exactly; runs of whitespace collapse to single
/// spaces. A word wider than `width` gets a line of its own rather than
/// being split. Wordless input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let candidate = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if candidate <= width || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
#[path = "wrap_test.rs"]
mod wrap_test;
