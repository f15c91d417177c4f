//! Centered two-line message for loading, failure, and empty results.

use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Renders the message at `row` and its subtitle below. Returns the next free
/// row.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_empty_state(
    out: &mut impl Write,
    row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let color = if empty.is_error { &theme.colors.error_fg } else { &theme.colors.empty_state_fg };

    position_cursor(out, row, 1)?;
    write!(out, "{}{}", Theme::bold(), Theme::fg(color))?;
    write_centered(out, &empty.message, cols)?;
    write!(out, "{}", Theme::reset())?;

    if empty.subtitle.is_empty() {
        return Ok(row + 1);
    }

    position_cursor(out, row + 1, 1)?;
    write!(out, "{}", Theme::fg(&theme.colors.text_dim))?;
    write_centered(out, &empty.subtitle, cols)?;
    write!(out, "{}", Theme::reset())?;
    Ok(row + 2)
}
