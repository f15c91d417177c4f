//! Detail overlay drawn over the card list.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;
use std::io::{self, Write};

fn framed_line(
    out: &mut impl Write,
    row: usize,
    text: &str,
    text_color: &str,
    theme: &Theme,
    inner: usize,
) -> io::Result<()> {
    let text = truncate(text, inner);
    position_cursor(out, row, 2)?;
    write!(
        out,
        "{border}│{reset} {color}{text}{pad}{reset} {border}│{reset}",
        border = Theme::fg(&theme.colors.detail_border),
        color = Theme::fg(text_color),
        pad = " ".repeat(inner.saturating_sub(display_width(&text))),
        reset = Theme::reset(),
    )
}

/// Renders the overlay box starting at `row`. Returns the row below it.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_detail(
    out: &mut impl Write,
    row: usize,
    detail: &DetailInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let colors = &theme.colors;
    let inner = cols.saturating_sub(6);
    let border = Theme::fg(&colors.detail_border);
    let mut current_row = row;

    position_cursor(out, current_row, 2)?;
    write!(out, "{border}┌{}┐{}", "─".repeat(inner + 2), Theme::reset())?;
    current_row += 1;

    framed_line(
        out,
        current_row,
        &format!("{} ({})", detail.title, detail.year),
        &colors.header_fg,
        theme,
        inner,
    )?;
    current_row += 1;

    framed_line(out, current_row, "", &colors.text_normal, theme, inner)?;
    current_row += 1;

    for line in &detail.description {
        framed_line(out, current_row, line, &colors.text_normal, theme, inner)?;
        current_row += 1;
    }
    if !detail.description.is_empty() {
        framed_line(out, current_row, "", &colors.text_normal, theme, inner)?;
        current_row += 1;
    }

    let poster_color = if detail.has_poster { &colors.text_dim } else { &colors.disabled_fg };
    framed_line(out, current_row, &format!("Poster: {}", detail.poster), poster_color, theme, inner)?;
    current_row += 1;

    framed_line(out, current_row, "[c] close", &colors.text_dim, theme, inner)?;
    current_row += 1;

    position_cursor(out, current_row, 2)?;
    write!(out, "{border}└{}┘{}", "─".repeat(inner + 2), Theme::reset())?;

    Ok(current_row + 1)
}
