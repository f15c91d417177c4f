//! Shared text layout and cursor helpers.
//!
//! Widths are counted in `char`s, which matches terminal columns for the
//! Latin-script titles the catalog holds.

use std::io::{self, Write};

/// Moves the cursor to a 1-indexed `row` and `col`.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn position_cursor(out: &mut impl Write, row: usize, col: usize) -> io::Result<()> {
    write!(out, "\u{001b}[{row};{col}H")
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` columns, ending in `…` when cut.
///
/// # Examples
///
/// ```
/// use cartelera::ui::helpers::truncate;
///
/// assert_eq!(truncate("Amélie", 10), "Amélie");
/// assert_eq!(truncate("Amélie", 4), "Amé…");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Greedy word wrap to lines of at most `width` columns.
///
/// Words longer than a line are split. Empty or blank text gives no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line.is_empty() { word.len() } else { word.len() + 1 };
        if display_width(&line) + needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Writes `text` centered in `cols`, padding both sides with spaces.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_centered(out: &mut impl Write, text: &str, cols: usize) -> io::Result<()> {
    let len = display_width(text).min(cols);
    let padding = cols.saturating_sub(len) / 2;
    write!(
        out,
        "{}{}{}",
        " ".repeat(padding),
        text,
        " ".repeat(cols.saturating_sub(padding + len))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate("Heat", 0), "");
        assert_eq!(truncate("Heat", 1), "…");
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("a group of professional bank robbers", 12),
            vec!["a group of", "professional", "bank robbers"]
        );
    }

    #[test]
    fn splits_overlong_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn centers_text() {
        let mut out = Vec::new();
        write_centered(&mut out, "ab", 6).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  ab  ");
    }
}
