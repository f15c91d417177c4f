//! Full-screen renderer.
//!
//! Draws a [`UIViewModel`] top to bottom:
//!
//! ```text
//! title (count)
//! Location: /path?page=N
//! ───────────────
//! Year: [....]   Per page:  5  10  20
//! ───────────────
//! cards | empty state | detail overlay
//! ───────────────
//! ‹ Prev  1  2  3  Next ›
//! key hints (bottom row)
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\u{001b}[2J";

/// Computes the view model for `state` and draws it.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render(out: &mut impl Write, state: &AppState, rows: usize, cols: usize) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(out, &viewmodel, &state.theme, rows, cols)
}

/// Draws a view model onto a cleared `rows` × `cols` screen.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_viewmodel(
    out: &mut impl Write,
    vm: &UIViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> io::Result<()> {
    write!(out, "{CLEAR_SCREEN}")?;

    let mut row = components::render_header(out, 1, &vm.header, theme, cols)?;
    row = components::render_separator(out, row, theme, cols)?;

    match &vm.body {
        Body::Status(status) => {
            row = components::render_empty_state(out, row + 2, status, theme, cols)?;
        }
        Body::Catalog(panel) => {
            row = components::render_filter_bar(out, row, &panel.filter_bar, theme)?;
            row = components::render_separator(out, row, theme, cols)?;

            row = match (&panel.detail, &panel.empty_state) {
                (Some(detail), _) => components::render_detail(out, row, detail, theme, cols)?,
                (None, Some(empty)) => components::render_empty_state(out, row + 1, empty, theme, cols)? + 1,
                (None, None) => components::render_cards(out, row, &panel.cards, theme)?,
            };

            row = components::render_separator(out, row, theme, cols)?;
            row = components::render_pagination(out, row, &panel.pagination, theme)?;
        }
    }

    components::render_footer(out, rows.max(row + 1), &vm.footer, theme, cols)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{LoadFailure, LoadState};
    use crate::domain::MediaEntry;

    fn strip_ansi(raw: &[u8]) -> String {
        let text = String::from_utf8_lossy(raw);
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    fn screen(state: &AppState) -> String {
        let mut out = Vec::new();
        render(&mut out, state, 30, 80).unwrap();
        strip_ansi(&out)
    }

    fn ready(entries: Vec<MediaEntry>) -> AppState {
        let mut state = AppState::default();
        state.entries = entries;
        state.load_state = LoadState::Ready;
        state.recompute_view();
        state
    }

    #[test]
    fn catalog_screen_lists_cards_and_controls() {
        let state = ready(vec![
            MediaEntry::movie("Heat", 1995).with_poster("https://img/heat.jpg"),
            MediaEntry::movie("Alien", 1979),
        ]);

        let text = screen(&state);

        assert!(text.contains("Movies (2)"));
        assert!(text.contains("1. Alien (1979)"));
        assert!(text.contains("(no poster)"));
        assert!(text.contains("2. Heat (1995)"));
        assert!(text.contains("https://img/heat.jpg"));
        assert!(text.contains("‹ Prev"));
        assert!(text.contains("Next ›"));
        assert!(text.contains("Per page:"));
    }

    #[test]
    fn failure_screen_hides_catalog() {
        let mut state = ready(vec![MediaEntry::movie("Heat", 1995)]);
        state.entries.clear();
        state.load_state = LoadState::Failed(LoadFailure::FetchFailed);
        state.recompute_view();

        let text = screen(&state);

        assert!(text.contains("Oops! Something went wrong..."));
        assert!(!text.contains("Per page:"));
    }

    #[test]
    fn detail_overlay_replaces_cards() {
        let mut state = ready(vec![
            MediaEntry::movie("Heat", 1995).with_description("Cops and robbers."),
            MediaEntry::movie("Alien", 1979),
        ]);
        state.selection = state.view.visible.get(1).cloned();

        let text = screen(&state);

        assert!(text.contains("Heat (1995)"));
        assert!(text.contains("Cops and robbers."));
        assert!(text.contains("[c] close"));
        assert!(!text.contains("Alien (1979)"));
    }

    #[test]
    fn notice_replaces_key_hints() {
        let mut state = ready(vec![]);
        state.notice = Some("unknown command 'z'".to_string());

        let text = screen(&state);

        assert!(text.contains("unknown command 'z'"));
        assert!(!text.contains("q: quit"));
    }
}
