//! Year filter input and page-size selector.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;
use std::io::{self, Write};

/// Renders `Year: [....]   Per page:  5  10  20` with the active size
/// highlighted. Returns the next free row.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_filter_bar(
    out: &mut impl Write,
    row: usize,
    filter: &FilterBarInfo,
    theme: &Theme,
) -> io::Result<usize> {
    let colors = &theme.colors;

    position_cursor(out, row, 1)?;
    write!(out, "{}Year: [", Theme::fg(&colors.text_dim))?;
    if filter.year.is_empty() {
        write!(out, "{}{:<6}", Theme::fg(&colors.disabled_fg), "any")?;
    } else {
        write!(out, "{}{:<6}", Theme::fg(&colors.text_normal), filter.year)?;
    }
    write!(out, "{}]   Per page:", Theme::fg(&colors.text_dim))?;

    for option in &filter.page_sizes {
        write!(out, " ")?;
        if option.is_active {
            write!(
                out,
                "{}{}{} {} {}",
                Theme::bold(),
                Theme::fg(&colors.active_fg),
                Theme::bg(&colors.active_bg),
                option.count,
                Theme::reset()
            )?;
        } else {
            write!(out, "{} {} ", Theme::fg(&colors.text_normal), option.count)?;
        }
    }

    write!(out, "{}", Theme::reset())?;
    Ok(row + 1)
}
