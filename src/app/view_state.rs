//! Shared view state and its transition functions.
//!
//! [`ViewState`] holds the three values the rest of the application reads to
//! derive the visible slice: the raw year filter text, the page size, and the
//! current page. Fields are private; every mutation goes through a transition
//! function so that the page invariants cannot be bypassed:
//!
//! - `current_page` is never below 1
//! - changing the filter or the page size resets `current_page` to 1

use crate::catalog::ResultsPerPage;

/// Filter, page size, and page shared by the derivation and the URL sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filter_year: String,
    results_per_page: ResultsPerPage,
    current_page: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ResultsPerPage::default())
    }
}

impl ViewState {
    /// Creates a state with no filter, on page 1.
    #[must_use]
    pub const fn new(results_per_page: ResultsPerPage) -> Self {
        Self {
            filter_year: String::new(),
            results_per_page,
            current_page: 1,
        }
    }

    #[must_use]
    pub fn filter_year(&self) -> &str {
        &self.filter_year
    }

    #[must_use]
    pub const fn results_per_page(&self) -> ResultsPerPage {
        self.results_per_page
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Replaces the year filter text and returns to page 1.
    ///
    /// Returns `false`, leaving the state untouched, if the text is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartelera::app::ViewState;
    ///
    /// let mut view = ViewState::default();
    /// view.set_current_page(4);
    ///
    /// assert!(view.set_filter_year("2010"));
    /// assert_eq!(view.current_page(), 1);
    /// assert!(!view.set_filter_year("2010"));
    /// ```
    pub fn set_filter_year(&mut self, filter_year: impl Into<String>) -> bool {
        let filter_year = filter_year.into();
        if self.filter_year == filter_year {
            return false;
        }
        self.filter_year = filter_year;
        self.current_page = 1;
        true
    }

    /// Changes the page size and returns to page 1.
    ///
    /// Returns `false`, leaving the state untouched, if the size is unchanged.
    pub fn set_results_per_page(&mut self, results_per_page: ResultsPerPage) -> bool {
        if self.results_per_page == results_per_page {
            return false;
        }
        self.results_per_page = results_per_page;
        self.current_page = 1;
        true
    }

    /// Moves to `page`, raising 0 to 1.
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }
}
