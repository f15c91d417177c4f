//! Footer with key hints or a one-shot notice.

use crate::ui::helpers::{position_cursor, truncate, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// # Errors
///
/// Returns any error from the writer.
pub fn render_footer(
    out: &mut impl Write,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let (text, color) = match &footer.notice {
        Some(notice) => (notice.as_str(), &theme.colors.notice_fg),
        None => (footer.keybindings.as_str(), &theme.colors.text_dim),
    };

    position_cursor(out, row, 1)?;
    write!(out, "{}", Theme::fg(color))?;
    write_centered(out, &truncate(text, cols), cols)?;
    write!(out, "{}", Theme::reset())?;
    Ok(row + 1)
}
