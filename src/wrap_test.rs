/// Tests for the greedy word wrapper
///
/// The wrapper drives all indented reasoning output, so these tests pin
/// down both the packing behavior and the word-preservation contract.
use super::*;
use unicode_width::UnicodeWidthStr;

#[test]
fn test_wrap_quick_brown_fox_at_20() {
    let lines = wrap_text("the quick brown fox jumps over the lazy dog", 20);
    assert_eq!(lines, vec!["the quick brown fox", "jumps over the lazy", "dog"]);
    for line in &lines {
        assert!(UnicodeWidthStr::width(line.as_str()) <= 20);
    }
}

#[test]
fn test_wrap_preserves_word_sequence() {
    let text = "I should block the opponent's open three on the left \
                diagonal before extending my own row, since losing tempo \
                here loses the game outright";
    let lines = wrap_text(text, 60);

    let original: Vec<&str> = text.split_whitespace().collect();
    let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
    assert_eq!(original, rejoined);
}

#[test]
fn test_wrap_is_greedy() {
    // Every line except the last must be unable to hold the next line's
    // first word without overflowing.
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu";
    let width = 25;
    let lines = wrap_text(text, width);
    assert!(lines.len() > 1);

    for pair in lines.windows(2) {
        let line_width = UnicodeWidthStr::width(pair[0].as_str());
        let next_word = pair[1].split_whitespace().next().unwrap();
        let next_width = UnicodeWidthStr::width(next_word);
        assert!(
            line_width + 1 + next_width > width,
            "line {:?} had room for {:?}",
            pair[0],
            next_word
        );
    }
}

#[test]
fn test_wrap_no_empty_lines() {
    let lines = wrap_text("  spaced   out    words  ", 10);
    assert_eq!(lines, vec!["spaced out", "words"]);
    assert!(lines.iter().all(|l| !l.is_empty()));
}

#[test]
fn test_wrap_wordless_input_yields_nothing() {
    assert!(wrap_text("", 60).is_empty());
    assert!(wrap_text("   \n\t  ", 60).is_empty());
}

#[test]
fn test_wrap_oversized_word_gets_own_line() {
    let lines = wrap_text("ok supercalifragilisticexpialidocious ok", 10);
    assert_eq!(lines, vec!["ok", "supercalifragilisticexpialidocious", "ok"]);
}

#[test]
fn test_wrap_exact_fit_boundary() {
    // "aaaa bbbb" is exactly 9 columns
    assert_eq!(wrap_text("aaaa bbbb", 9), vec!["aaaa bbbb"]);
    assert_eq!(wrap_text("aaaa bbbb", 8), vec!["aaaa", "bbbb"]);
}

#[test]
fn test_wrap_single_word_fits() {
    assert_eq!(wrap_text("tempo", 60), vec!["tempo"]);
}

#[test]
fn test_wrap_width_one_packs_one_word_per_line() {
    assert_eq!(wrap_text("a b c", 1), vec!["a", "b", "c"]);
}
