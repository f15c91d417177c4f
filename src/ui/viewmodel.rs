//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready text (already truncated or wrapped)
//! and flags, never business logic.

#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Title line and address bar.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Heading with the number of matching movies, e.g. `Movies (12)`.
    pub title: String,
    pub location: String,
}

/// Main area: either a whole-screen status or the catalog.
#[derive(Debug, Clone)]
pub enum Body {
    /// Loading or failure message in place of the catalog.
    Status(EmptyState),
    Catalog(CatalogPanel),
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    pub is_error: bool,
}

#[derive(Debug, Clone)]
pub struct CatalogPanel {
    pub filter_bar: FilterBarInfo,
    pub cards: Vec<CardItem>,
    /// Set when the current page has no cards.
    pub empty_state: Option<EmptyState>,
    pub pagination: PaginationInfo,
    pub detail: Option<DetailInfo>,
}

#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Year filter text exactly as typed.
    pub year: String,
    pub page_sizes: Vec<PageSizeOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeOption {
    pub count: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct CardItem {
    /// 1-based position on the page; the number typed to open it.
    pub position: usize,
    pub title: String,
    pub year: String,
    /// Poster URL, or a placeholder when the entry has none.
    pub poster: String,
    pub has_poster: bool,
}

#[derive(Debug, Clone)]
pub struct PaginationInfo {
    pub pages: Vec<PageButton>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub is_active: bool,
}

/// Detail overlay for the selected entry.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub title: String,
    pub year: String,
    /// Description wrapped to the overlay width.
    pub description: Vec<String>,
    pub poster: String,
    pub has_poster: bool,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
    /// Shown instead of the key hints when set.
    pub notice: Option<String>,
}
