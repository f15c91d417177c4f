//! Movie card list.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;
use std::io::{self, Write};

/// Renders each card on two lines: numbered title with year, then the
/// poster URL (or placeholder). Returns the next free row.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_cards(out: &mut impl Write, row: usize, cards: &[CardItem], theme: &Theme) -> io::Result<usize> {
    let colors = &theme.colors;
    let mut current_row = row;

    for card in cards {
        position_cursor(out, current_row, 1)?;
        write!(
            out,
            "{}{:>3}. {}{}{} {}({}){}",
            Theme::fg(&colors.text_dim),
            card.position,
            Theme::bold(),
            Theme::fg(&colors.text_normal),
            card.title,
            Theme::fg(&colors.text_dim),
            card.year,
            Theme::reset()
        )?;

        let poster_color = if card.has_poster { &colors.text_dim } else { &colors.disabled_fg };
        position_cursor(out, current_row + 1, 1)?;
        write!(out, "     {}{}{}", Theme::fg(poster_color), card.poster, Theme::reset())?;

        current_row += 2;
    }

    Ok(current_row)
}
