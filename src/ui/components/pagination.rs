//! Prev / page numbers / Next bar.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;
use std::io::{self, Write};

/// Renders every page number with the current one highlighted; Prev and Next
/// are dimmed when unavailable. Returns the next free row.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_pagination(
    out: &mut impl Write,
    row: usize,
    pagination: &PaginationInfo,
    theme: &Theme,
) -> io::Result<usize> {
    let colors = &theme.colors;
    let control = |enabled: bool| {
        if enabled { Theme::fg(&colors.text_normal) } else { Theme::fg(&colors.disabled_fg) }
    };

    position_cursor(out, row, 1)?;
    write!(out, "{}‹ Prev{} ", control(pagination.previous_enabled), Theme::reset())?;

    for page in &pagination.pages {
        if page.is_active {
            write!(
                out,
                " {}{}{} {} {}",
                Theme::bold(),
                Theme::fg(&colors.active_fg),
                Theme::bg(&colors.active_bg),
                page.number,
                Theme::reset()
            )?;
        } else {
            write!(out, " {} {} ", Theme::fg(&colors.text_normal), page.number)?;
        }
    }

    write!(out, "  {}Next ›{}", control(pagination.next_enabled), Theme::reset())?;
    Ok(row + 1)
}
