//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the session. It separates
//! core data (the loaded entries, the [`ViewState`], the location) from the
//! derived [`CatalogView`], which is refreshed by [`AppState::recompute_view`]
//! at the end of every transition. View models are computed on demand from
//! that snapshot and never stored.
//!
//! # Example
//!
//! ```rust
//! use cartelera::app::AppState;
//! use cartelera::domain::MediaEntry;
//!
//! let mut state = AppState::default();
//! state.entries = vec![MediaEntry::movie("Heat", 1995)];
//! state.recompute_view();
//!
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "Movies (1)");
//! ```

use super::modes::LoadState;
use super::view_state::ViewState;
use crate::catalog::{self, CatalogView, ResultsPerPage};
use crate::domain::MediaEntry;
use crate::infrastructure::Location;
use crate::ui::helpers::{truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CardItem, CatalogPanel, DetailInfo, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo,
    PageButton, PageSizeOption, PaginationInfo, UIViewModel,
};

const DEFAULT_TITLE: &str = "Movies";
const MISSING_YEAR: &str = "n/a";
const MISSING_POSTER: &str = "(no poster)";

const LIST_KEYS: &str =
    "y <year>: filter  r <5|10|20>: per page  p/n: prev/next  g <n>: page  <k>: open  b/f: back/forward  q: quit";
const DETAIL_KEYS: &str = "c: close  b/f: back/forward  q: quit";
const STATUS_KEYS: &str = "q: quit";

/// Central application state container.
///
/// Mutated only by [`handle_event`](super::handle_event).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every entry from the catalog, in document order.
    pub entries: Vec<MediaEntry>,

    /// Filter, page size, and current page.
    pub view_state: ViewState,

    /// Visible slice and page counts derived from `entries` and `view_state`.
    pub view: CatalogView,

    pub load_state: LoadState,

    /// Entry shown in the detail overlay.
    pub selection: Option<MediaEntry>,

    /// Current address-bar location.
    pub location: Location,

    /// One-shot message shown in the footer, cleared by the next event.
    pub notice: Option<String>,

    pub theme: Theme,

    /// Page heading, shown with the number of matching movies.
    pub title: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewState::default(), Theme::default(), DEFAULT_TITLE)
    }
}

impl AppState {
    /// Creates an unmounted state with no entries.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cartelera::app::{AppState, ViewState};
    /// use cartelera::catalog::ResultsPerPage;
    /// use cartelera::ui::Theme;
    ///
    /// let state = AppState::new(ViewState::new(ResultsPerPage::Ten), Theme::default(), "Films");
    /// assert_eq!(state.view_state.current_page(), 1);
    /// assert!(state.view.visible.is_empty());
    /// ```
    #[must_use]
    pub fn new(view_state: ViewState, theme: Theme, title: impl Into<String>) -> Self {
        let mut state = Self {
            entries: vec![],
            view_state,
            view: CatalogView::default(),
            load_state: LoadState::default(),
            selection: None,
            location: Location::default(),
            notice: None,
            theme,
            title: title.into(),
        };
        state.recompute_view();
        state
    }

    /// Re-derives [`view`](Self::view) from the entries and the view state.
    pub fn recompute_view(&mut self) {
        let _span = tracing::debug_span!("recompute_view").entered();

        self.view = catalog::derive(
            &self.entries,
            self.view_state.filter_year(),
            self.view_state.results_per_page(),
            self.view_state.current_page(),
        );

        tracing::debug!(
            filtered = self.view.filtered_count,
            visible = self.view.visible.len(),
            page = self.view.current_page,
            total_pages = self.view.total_pages,
            "view recomputed"
        );
    }

    /// Builds the renderable view model for a `rows` × `cols` terminal.
    ///
    /// Titles and URLs are truncated to the width; the detail description is
    /// wrapped and capped so the overlay fits the height.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", rows, cols).entered();

        let header = HeaderInfo {
            title: format!("{} ({})", self.title, self.view.filtered_count),
            location: truncate(&self.location.to_string(), cols.saturating_sub(12)),
        };

        let (body, keybindings) = match self.load_state {
            LoadState::Loading => (
                Body::Status(EmptyState {
                    message: "Loading...".to_string(),
                    subtitle: String::new(),
                    is_error: false,
                }),
                STATUS_KEYS,
            ),
            LoadState::Failed(_) => (
                Body::Status(EmptyState {
                    message: "Oops! Something went wrong...".to_string(),
                    subtitle: "The catalog could not be loaded.".to_string(),
                    is_error: true,
                }),
                STATUS_KEYS,
            ),
            LoadState::Idle | LoadState::Ready => {
                let keys = if self.selection.is_some() { DETAIL_KEYS } else { LIST_KEYS };
                (Body::Catalog(self.catalog_panel(rows, cols)), keys)
            }
        };

        UIViewModel {
            header,
            body,
            footer: FooterInfo {
                keybindings: keybindings.to_string(),
                notice: self.notice.clone(),
            },
        }
    }

    fn catalog_panel(&self, rows: usize, cols: usize) -> CatalogPanel {
        let width = cols.saturating_sub(4);

        let cards = self
            .view
            .visible
            .iter()
            .enumerate()
            .map(|(index, entry)| CardItem {
                position: index + 1,
                title: truncate(&entry.title, width.saturating_sub(16)),
                year: display_year(entry),
                poster: truncate(entry.poster_url().unwrap_or(MISSING_POSTER), width),
                has_poster: entry.poster_url().is_some(),
            })
            .collect();

        let empty_state = self.view.visible.is_empty().then(|| EmptyState {
            message: "No movies to show.".to_string(),
            subtitle: if self.view_state.filter_year().is_empty() {
                "The catalog has no movies on this page.".to_string()
            } else {
                format!("Nothing matches year '{}'.", self.view_state.filter_year())
            },
            is_error: false,
        });

        let current = self.view.current_page;
        let pagination = PaginationInfo {
            pages: self
                .view
                .page_numbers()
                .into_iter()
                .map(|number| PageButton {
                    number,
                    is_active: number == current,
                })
                .collect(),
            previous_enabled: self.view.has_previous(),
            next_enabled: self.view.has_next(),
        };

        let active_size = self.view_state.results_per_page();
        let filter_bar = FilterBarInfo {
            year: self.view_state.filter_year().to_string(),
            page_sizes: ResultsPerPage::ALL
                .iter()
                .map(|size| PageSizeOption {
                    count: size.count(),
                    is_active: *size == active_size,
                })
                .collect(),
        };

        // Header, filter bar, borders, detail chrome and footer take about a dozen rows.
        let max_description_lines = rows.saturating_sub(12).max(1);
        let detail = self.selection.as_ref().map(|entry| {
            let mut description = wrap_text(entry.description.as_deref().unwrap_or_default(), width);
            description.truncate(max_description_lines);

            DetailInfo {
                title: truncate(&entry.title, width),
                year: display_year(entry),
                description,
                poster: truncate(entry.poster_url().unwrap_or(MISSING_POSTER), width.saturating_sub(8)),
                has_poster: entry.poster_url().is_some(),
            }
        });

        CatalogPanel {
            filter_bar,
            cards,
            empty_state,
            pagination,
            detail,
        }
    }
}

fn display_year(entry: &MediaEntry) -> String {
    entry
        .release_year
        .map_or_else(|| MISSING_YEAR.to_string(), |year| year.to_string())
}
