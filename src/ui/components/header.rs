//! Title bar and address bar.

use crate::ui::helpers::{position_cursor, truncate, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Renders the centered title and the location line below it.
///
/// Returns the next free row.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_header(
    out: &mut impl Write,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    position_cursor(out, row, 1)?;
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    if let Some(bg) = &theme.colors.header_bg {
        write!(out, "{}", Theme::bg(bg))?;
    }
    write_centered(out, &truncate(&header.title, cols), cols)?;
    write!(out, "{}", Theme::reset())?;

    position_cursor(out, row + 1, 1)?;
    write!(
        out,
        "{}Location: {}{}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::fg(&theme.colors.location_fg),
        header.location,
        Theme::reset()
    )?;

    Ok(row + 2)
}

/// Renders a full-width separator line.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_separator(out: &mut impl Write, row: usize, theme: &Theme, cols: usize) -> io::Result<usize> {
    position_cursor(out, row, 1)?;
    write!(out, "{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(cols), Theme::reset())?;
    Ok(row + 1)
}
